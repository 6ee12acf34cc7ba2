use crate::constants::DEBUG_PANEL_ID;
use ocean_core::Ocean;
use std::fmt::Write;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        _ = el.class_list().remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Per-person state, tunables and counters as preformatted text.
pub fn update(document: &web::Document, ocean: &Ocean) {
    let Some(el) = document.get_element_by_id(DEBUG_PANEL_ID) else {
        return;
    };
    let pool = ocean.pool();
    let t = ocean.tunables();
    let mut text = String::new();
    _ = writeln!(
        text,
        "frame {}  emitters {}/{}  wander {}",
        ocean.frames(),
        pool.emitters().len(),
        t.pool.max_emitters,
        if ocean.wander().is_active() { "on" } else { "off" },
    );
    _ = writeln!(
        text,
        "rings {}  speed {:.0}  intensity {:.0}",
        t.ripple.ring_count, t.ripple.expansion_speed, t.ripple.wave_intensity
    );
    for id in pool.persons() {
        let Some(slot) = pool.slot(id) else { continue };
        let live = pool.emitters().iter().filter(|e| e.owner() == id).count();
        let raw = slot
            .last_raw
            .map(|r| format!("{r:.1}"))
            .unwrap_or_else(|| "-".into());
        let x = slot
            .last_emit
            .map(|p| format!("{:.0}", p.x))
            .unwrap_or_else(|| "-".into());
        _ = writeln!(
            text,
            "#{id}: raw {raw}  x {x}  {}  live {live}",
            slot.phase.label()
        );
    }
    el.set_text_content(Some(&text));
}
