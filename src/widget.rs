/// Menu widget: loads a menu, builds the category dropdown and renders the
/// dishes of the selected category as expandable details.
use tracing::{debug, info};

use crate::data_provider::MenuProvider;
use crate::dom::{ChangeEvent, DomError, NodeId, SelectOption};
use crate::error::{MenuError, MenuResult};
use crate::menu::{Menu, MenuItem};
use crate::surface::{Content, DropdownSpec, RenderSurface, BOUND_ATTRIBUTE};

/// Id of the category select element
pub const SELECT_ID: &str = "select-dish-type";
/// Text of the label in front of the select element
pub const SELECT_LABEL: &str = "Select dish type:";
/// Placeholder shown while no category is selected
pub const SELECT_PLACEHOLDER: &str = "Select one";
/// Class of the element holding the rendered details
pub const DETAILS_CONTAINER_CLASS: &str = "menu-details";

const DROPDOWN: DropdownSpec<'static> = DropdownSpec {
    element_id: SELECT_ID,
    label: SELECT_LABEL,
    placeholder: SELECT_PLACEHOLDER,
};

/// A menu bound to one container on a rendering surface
#[derive(Debug)]
pub struct MenuWidget<S: RenderSurface> {
    surface: S,
    menu: Menu,
    container: NodeId,
    selector: NodeId,
    details: NodeId,
    selected: Option<String>,
}

impl<S: RenderSurface> MenuWidget<S> {
    /// Bind a widget to the element `container_id` and load its menu from `location`
    ///
    /// The container is resolved before anything is fetched. On failure nothing
    /// has been added to the surface and the container stays unbound.
    pub async fn initialize<P>(
        mut surface: S,
        provider: &P,
        container_id: &str,
        location: &str,
    ) -> MenuResult<Self>
    where
        P: MenuProvider + ?Sized,
    {
        let container = surface
            .element_by_id(container_id)
            .ok_or_else(|| MenuError::ContainerNotFound(container_id.to_string()))?;
        if surface.attribute(container, BOUND_ATTRIBUTE).is_some() {
            return Err(MenuError::AlreadyBound(container_id.to_string()));
        }

        let details = surface.create_element("div");
        surface.add_class(details, DETAILS_CONTAINER_CLASS);

        debug!("WIDGET: loading menu from {} into #{}", location, container_id);
        let menu = provider.fetch_menu(location).await?;

        let options: Vec<SelectOption> = menu
            .sections()
            .iter()
            .map(|section| SelectOption::new(&section.id, &section.label))
            .collect();
        let selector = surface.populate_dropdown(container, &options, &DROPDOWN);
        surface.append_child(container, details);
        surface.set_attribute(container, BOUND_ATTRIBUTE, "bound");

        info!(
            "WIDGET: #{} ready with {} sections",
            container_id,
            menu.len()
        );
        Ok(Self {
            surface,
            menu,
            container,
            selector,
            details,
            selected: None,
        })
    }

    /// Render the section with id `selected_id`
    ///
    /// The details container is always rebuilt from scratch. A section with no
    /// items, or an id that matches nothing, leaves it empty.
    pub fn on_selection_changed(&mut self, selected_id: &str) {
        self.selected = Some(selected_id.to_string()).filter(|id| !id.is_empty());
        self.surface.clear_children(self.details);

        let items = match self.menu.find(selected_id) {
            Some(section) if !section.items.is_empty() => &section.items,
            _ => {
                debug!("RENDER: cleared details for '{}'", selected_id);
                return;
            }
        };

        for item in items {
            render_item(&mut self.surface, self.details, item);
        }
        debug!("RENDER: {} items for '{}'", items.len(), selected_id);
    }

    /// Route a change event from the surface
    ///
    /// Returns false when the event belongs to some other element.
    pub fn handle_change(&mut self, event: &ChangeEvent) -> bool {
        if event.target != self.selector {
            return false;
        }
        self.on_selection_changed(&event.value);
        true
    }

    /// Change the selector's value as a user would
    pub fn select(&mut self, value: &str) -> Result<(), DomError> {
        if let Some(event) = self.surface.set_select_value(self.selector, value)? {
            self.handle_change(&event);
        }
        Ok(())
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Id of the currently rendered section, if any
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn selector(&self) -> NodeId {
        self.selector
    }

    pub fn details_container(&self) -> NodeId {
        self.details
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Append one `details` node for `item` to `container`
fn render_item<S: RenderSurface>(surface: &mut S, container: NodeId, item: &MenuItem) {
    let summary = surface.create_element("summary");
    let name = summary_item(surface, &item.name, "name");
    let price = summary_item(surface, &item.price, "price");
    surface.insert_content_into_container(summary, &[name, price]);
    surface.create_details(&item.dom_id(), &item.desc, summary, container, true);
}

fn summary_item<S: RenderSurface>(surface: &mut S, text: &str, class: &str) -> NodeId {
    let span = surface.create_element_content("span", Content::Text(text));
    surface.add_class(span, class);
    span
}
