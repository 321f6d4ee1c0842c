//! Step rendering module
//!
//! One module per step of the signup flow:
//! - `field_renderer`: Field and heading rendering utilities
//! - `personal_info_form`: Name, email and phone inputs
//! - `plan_form`: Plan cards and billing toggle
//! - `addon_form`: Add-on checkboxes
//! - `summary_page`: Order summary
//! - `confirmation_page`: Thank-you screen

mod addon_form;
mod confirmation_page;
mod field_renderer;
mod personal_info_form;
mod plan_form;
mod summary_page;

pub use addon_form::draw as draw_addon_select;
pub use confirmation_page::draw as draw_confirmation;
pub use personal_info_form::draw as draw_personal_info;
pub use plan_form::draw as draw_plan_select;
pub use summary_page::draw as draw_summary;
