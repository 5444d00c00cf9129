use crate::ui::client::{ApiError, LocationsApi};
use crate::ui::page::PageModel;

/// Glue between the page model and the locations API
///
/// Owns the flows the page performs: the initial load, the refresh after
/// every mutation, submitting the add form and confirming a delete.
pub struct PageController {
    api: LocationsApi,
    pub model: PageModel,
}

impl PageController {
    pub fn new(api: LocationsApi) -> Self {
        Self {
            api,
            model: PageModel::new(),
        }
    }

    /// Initial fetch when the page comes up
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.refresh().await
    }

    /// Re-fetch the list and replace the table contents
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let locations = self.api.fetch_locations().await?;
        self.model.set_locations(locations);
        Ok(())
    }

    /// Submit the add form: create, refresh, close (which clears the form)
    ///
    /// Does nothing while the form is incomplete; the submit control is
    /// disabled in that state anyway.
    pub async fn submit_new_location(&mut self) -> Result<(), ApiError> {
        if !self.model.can_submit() {
            return Ok(());
        }
        let Some(draft) = self.model.form.to_draft() else {
            return Ok(());
        };

        self.api.create_location(&draft).await?;
        self.refresh().await?;
        self.model.close_modal();

        Ok(())
    }

    /// Confirm the delete dialog: delete the focused location, refresh, close
    pub async fn confirm_delete(&mut self) -> Result<(), ApiError> {
        let Some(cuid) = self.model.focused().map(|l| l.cuid.clone()) else {
            return Ok(());
        };

        self.api.delete_location(&cuid).await?;
        self.refresh().await?;
        self.model.close_modal();

        Ok(())
    }
}
