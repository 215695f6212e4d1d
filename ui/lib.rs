mod alert;
mod button;
mod form;
mod layout;
mod result_card;
mod util;
mod view;

pub mod ids;

pub use self::alert::*;
pub use self::button::*;
pub use self::form::*;
pub use self::layout::*;
pub use self::result_card::*;
pub use self::util::*;
pub use self::view::*;
