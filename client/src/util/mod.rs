//! Small shared helpers with no reactive state.

pub mod form;
