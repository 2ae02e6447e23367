use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, MouseEvent};

use crate::dom;

/// Selectors and open-state class for one flavour of accordion markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionBinding {
    pub trigger: &'static str,
    pub panel: &'static str,
    pub open_class: &'static str,
}

pub const ACCORDION: AccordionBinding = AccordionBinding {
    trigger: ".accordion .trigger",
    panel: ".accordion",
    open_class: "open",
};

pub const FAQ: AccordionBinding = AccordionBinding {
    trigger: ".faq-question",
    panel: ".faq-item",
    open_class: "active",
};

/// Closes every panel, then reopens `clicked` unless it was the open one.
pub fn toggle(open: &mut [bool], clicked: usize) {
    let was_open = open.get(clicked).copied().unwrap_or(false);
    open.iter_mut().for_each(|panel| *panel = false);
    if !was_open {
        if let Some(panel) = open.get_mut(clicked) {
            *panel = true;
        }
    }
}

fn on_trigger_click(
    document: &Document,
    binding: AccordionBinding,
    trigger: &Element,
) -> Result<(), JsValue> {
    let Some(clicked) = trigger.parent_element() else {
        return Ok(());
    };
    let mut panels = dom::query_all(document, binding.panel)?;
    let index = match panels.iter().position(|panel| *panel == clicked) {
        Some(index) => index,
        None => {
            panels.push(clicked);
            panels.len() - 1
        }
    };

    let mut open: Vec<bool> = panels
        .iter()
        .map(|panel| panel.class_list().contains(binding.open_class))
        .collect();
    toggle(&mut open, index);

    for (panel, is_open) in panels.iter().zip(open) {
        panel.class_list().toggle_with_force(binding.open_class, is_open)?;
    }
    Ok(())
}

pub fn init_accordion(document: &Document, binding: AccordionBinding) -> Result<(), JsValue> {
    let triggers = dom::query_all(document, binding.trigger)?;
    for trigger in &triggers {
        let document = document.clone();
        let target = trigger.clone();
        let callback = Closure::wrap(Box::new(move |_: MouseEvent| {
            if let Err(err) = on_trigger_click(&document, binding, &target) {
                log::warn!("Accordion toggle failed: {:?}", err);
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        trigger.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
        callback.forget();
    }
    if !triggers.is_empty() {
        log::debug!("Bound {} accordion triggers ({})", triggers.len(), binding.trigger);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(open: &[bool]) -> usize {
        open.iter().filter(|o| **o).count()
    }

    #[test]
    fn click_opens_only_the_clicked_panel() {
        let mut open = vec![false; 4];
        toggle(&mut open, 2);
        assert_eq!(open, vec![false, false, true, false]);
    }

    #[test]
    fn clicking_another_panel_moves_the_open_state() {
        let mut open = vec![false; 3];
        toggle(&mut open, 0);
        toggle(&mut open, 1);
        assert_eq!(open, vec![false, true, false]);
    }

    #[test]
    fn reclicking_the_open_panel_closes_everything() {
        let mut open = vec![false; 3];
        toggle(&mut open, 1);
        toggle(&mut open, 1);
        assert_eq!(open_count(&open), 0);
    }

    #[test]
    fn several_open_panels_collapse_to_one() {
        let mut open = vec![true, true, false];
        toggle(&mut open, 2);
        assert_eq!(open, vec![false, false, true]);

        let mut open = vec![true, true, false];
        toggle(&mut open, 0);
        assert_eq!(open_count(&open), 0);
    }

    #[test]
    fn any_click_sequence_leaves_at_most_one_open() {
        let mut open = vec![false; 5];
        let clicks = [0, 3, 3, 1, 4, 4, 4, 2, 0, 0, 1];
        for clicked in clicks {
            toggle(&mut open, clicked);
            assert!(open_count(&open) <= 1);
        }
        assert_eq!(open, vec![false, true, false, false, false]);
    }

    #[test]
    fn out_of_range_click_only_closes() {
        let mut open = vec![false, true];
        toggle(&mut open, 9);
        assert_eq!(open_count(&open), 0);
    }
}
