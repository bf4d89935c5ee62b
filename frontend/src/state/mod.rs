pub mod attachment;
pub mod nap_form;
