use crate::constants::{
    ACTIVE_CLASS, ANCHOR_SELECTOR, NAVBAR_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID,
    SCROLLED_CLASS, SECTION_SELECTOR,
};
use crate::dom;
use crate::model::{
    active_section, anchor_target, is_scrolled, link_is_active, MenuState, SectionBox,
};
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(window: &web::Window, document: &web::Document) {
    wire_navbar_scroll(window, document);
    wire_mobile_menu(document);
    wire_active_link(window, document);
    wire_smooth_scroll(document);
    log::info!("[nav] navigation wired");
}

fn wire_navbar_scroll(window: &web::Window, document: &web::Document) {
    let Some(navbar) = document.get_element_by_id(NAVBAR_ID) else {
        return;
    };
    let w = window.clone();
    dom::on_event(window, "scroll", move |_| {
        let cl = navbar.class_list();
        if is_scrolled(dom::scroll_y(&w)) {
            _ = cl.add_1(SCROLLED_CLASS);
        } else {
            _ = cl.remove_1(SCROLLED_CLASS);
        }
    });
}

fn apply_menu(
    state: MenuState,
    toggle: &web::Element,
    menu: &web::Element,
    body: Option<&web::HtmlElement>,
) {
    for el in [toggle, menu] {
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, state.is_open());
    }
    if let Some(body) = body {
        dom::set_style(body, "overflow", state.body_overflow());
    }
}

fn wire_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(menu)) = (
        document.get_element_by_id(NAV_TOGGLE_ID),
        document.get_element_by_id(NAV_MENU_ID),
    ) else {
        return;
    };
    let state = Rc::new(Cell::new(MenuState::default()));

    {
        let state = state.clone();
        let (t, m) = (toggle.clone(), menu.clone());
        let doc = document.clone();
        dom::add_click_listener(document, NAV_TOGGLE_ID, move || {
            let mut s = state.get();
            s.toggle();
            state.set(s);
            apply_menu(s, &t, &m, doc.body().as_ref());
        });
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let state = state.clone();
        let (t, m) = (toggle.clone(), menu.clone());
        let doc = document.clone();
        dom::on_event(&link, "click", move |_| {
            let mut s = state.get();
            s.close();
            state.set(s);
            apply_menu(s, &t, &m, doc.body().as_ref());
        });
    }
}

fn wire_active_link(window: &web::Window, document: &web::Document) {
    let sections = dom::query_all_html(document, SECTION_SELECTOR);
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    if sections.is_empty() || links.is_empty() {
        return;
    }
    let w = window.clone();
    dom::on_event(window, "scroll", move |_| {
        // Layout can shift (images, fonts), so section boxes are measured per event.
        let boxes: Vec<SectionBox> = sections
            .iter()
            .map(|s| SectionBox {
                id: s.id(),
                top: s.offset_top() as f64,
                height: s.client_height() as f64,
            })
            .collect();
        let current = active_section(dom::scroll_y(&w), &boxes);
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            _ = link
                .class_list()
                .toggle_with_force(ACTIVE_CLASS, link_is_active(&href, current));
        }
    });
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let a = anchor.clone();
        dom::on_event(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Some(target) = dom::query_one(&doc, selector) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
