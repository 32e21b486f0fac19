#![allow(missing_docs)]

pub(crate) mod fake_api;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use fake_api::{Call, FakeApi, Operation};
pub(crate) use html::{
    assert_form_error_message, assert_form_input, assert_form_submit_button, assert_hx_endpoint,
    assert_valid_html, must_get_form, parse_html_document, parse_html_fragment,
};
pub(crate) use http::{assert_status_ok, get_header};
