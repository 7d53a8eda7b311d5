//! The customer details form.

use storecart_core::checkout::{CustomerDetails, CustomerForm};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, HtmlTextAreaElement};

use crate::page::{CUSTOMER_ADDRESS_ID, CUSTOMER_NAME_ID, CUSTOMER_PHONE_ID};

/// Reads the three customer fields by id. A missing field reads as blank,
/// which checkout reports as missing details. The address may be an
/// `<input>` or a `<textarea>`.
pub struct DomCustomerForm {
    document: Document,
}

impl DomCustomerForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn value(&self, id: &str) -> String {
        let Some(el) = self.document.get_element_by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, id: &str, value: &str) {
        let Some(el) = self.document.get_element_by_id(id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }
}

impl CustomerForm for DomCustomerForm {
    fn read(&self) -> CustomerDetails {
        CustomerDetails::new(
            self.value(CUSTOMER_NAME_ID),
            self.value(CUSTOMER_PHONE_ID),
            self.value(CUSTOMER_ADDRESS_ID),
        )
    }

    fn clear(&mut self) {
        for id in [CUSTOMER_NAME_ID, CUSTOMER_PHONE_ID, CUSTOMER_ADDRESS_ID] {
            self.set_value(id, "");
        }
    }
}
