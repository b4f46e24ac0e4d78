//! App Root
//!
//! Binds the feed and the add-purchase toggle to the server-rendered page.

use std::rc::Rc;

use expenses::{ExpenseFeed, FeedConfig, FeedDriver, FeedError, PageError, PageResult};
use leptos::*;

use crate::api::{self, GlooTransport};
use crate::components::add_purchase;
use crate::dom::{WebDocument, WindowViewport};

const EMBEDDED_CONFIG: &str = include_str!("../expenses.toml");

/// Load the embedded configuration, falling back to defaults
pub fn load_config() -> FeedConfig {
    FeedConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("Using default config: {}", e).into());
        FeedConfig::default()
    })
}

/// Wire up the page
pub fn boot() -> PageResult<()> {
    let config = load_config();
    let window = window();
    let document = document();

    add_purchase::bind(&document, &config.elements)?;

    let container = document
        .get_elements_by_class_name(&config.elements.container_class)
        .item(0)
        .ok_or_else(|| PageError::MissingElement(format!(".{}", config.elements.container_class)))?;
    let status = document
        .get_element_by_id(&config.elements.status)
        .ok_or_else(|| PageError::MissingElement(format!("#{}", config.elements.status)))?;
    let initial = api::read_initial_page(&window)?;

    let feed = ExpenseFeed::new(WebDocument::new(document), container, status, &config, initial)?;
    let driver = Rc::new(FeedDriver::new(
        feed,
        GlooTransport,
        WindowViewport::new(window),
    ));

    let on_scroll = Rc::clone(&driver);
    let _scroll = window_event_listener(ev::scroll, move |_| {
        let driver = Rc::clone(&on_scroll);
        spawn_local(async move {
            report(driver.check().await);
        });
    });

    spawn_local(async move {
        report(driver.start().await);
    });

    Ok(())
}

/// Send load failures to the console
fn report(result: Result<(), FeedError>) {
    if let Err(e) = result {
        web_sys::console::error_1(&e.to_string().into());
    }
}
