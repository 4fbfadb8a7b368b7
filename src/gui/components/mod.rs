pub mod accordion;
pub mod carousel_view;
pub mod contact_form;
pub mod content_view;
pub mod mobile_nav;
pub mod modal;
pub mod page;
pub mod panel;
