use crate::models::{AddressSuggestion, DraftLocation, Location};

/// Which modal the locations page is showing
///
/// One tagged state instead of three independent booleans: two modals can
/// never be open at once, and the focused location only exists in the
/// variants that actually display one.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Viewing(Location),
    AddingNew,
    ConfirmingDelete(Location),
}

/// Draft fields of the add-location form
///
/// The name is typed by the user; latitude, longitude and address arrive
/// together by applying a suggestion picked in the address-autocomplete
/// widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationForm {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: String,
}

impl LocationForm {
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Take over the three outputs of a selected autocomplete suggestion
    pub fn apply_suggestion(&mut self, suggestion: &AddressSuggestion) {
        self.latitude = Some(suggestion.latitude);
        self.longitude = Some(suggestion.longitude);
        self.address = suggestion.address.clone();
    }

    /// All four fields populated; the submit control stays disabled until then
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && self.latitude.is_some()
            && self.longitude.is_some()
            && !self.address.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Draft for the create request, `None` while the form is incomplete
    pub fn to_draft(&self) -> Option<DraftLocation> {
        if self.name.is_empty() || self.address.is_empty() {
            return None;
        }
        Some(DraftLocation {
            name: self.name.clone(),
            latitude: self.latitude?,
            longitude: self.longitude?,
            address: self.address.clone(),
        })
    }
}

/// State of the locations page: the table contents, the open modal and the
/// add-form draft
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    pub locations: Vec<Location>,
    pub modal: ModalState,
    pub form: LocationForm,
}

impl PageModel {
    /// Fresh page: no modal open, no focused location, empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_add(&mut self) {
        self.modal = ModalState::AddingNew;
    }

    /// "View" action on a table row
    pub fn view_location(&mut self, location: Location) {
        self.modal = ModalState::Viewing(location);
    }

    /// "Delete" action on a table row
    pub fn request_delete(&mut self, location: Location) {
        self.modal = ModalState::ConfirmingDelete(location);
    }

    /// Close whichever modal is open; leaving the add modal clears the form
    pub fn close_modal(&mut self) {
        if self.modal == ModalState::AddingNew {
            self.form.clear();
        }
        self.modal = ModalState::Closed;
    }

    /// Whether the add form may be submitted
    pub fn can_submit(&self) -> bool {
        self.modal == ModalState::AddingNew && self.form.is_complete()
    }

    /// The location shown in the view or delete modal, if any
    pub fn focused(&self) -> Option<&Location> {
        match &self.modal {
            ModalState::Viewing(location) | ModalState::ConfirmingDelete(location) => {
                Some(location)
            }
            _ => None,
        }
    }

    pub fn set_locations(&mut self, locations: Vec<Location>) {
        self.locations = locations;
    }
}
