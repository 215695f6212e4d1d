mod field_label;
mod form;
mod number_field;
mod select_field;

pub use self::field_label::*;
pub use self::form::*;
pub use self::number_field::*;
pub use self::select_field::*;
