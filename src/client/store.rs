//! Owned state for a cadastro screen: the record list, the edit form, and
//! a loading/error/editing status.
//!
//! State is read through accessors and changed only by the actions on
//! [`CadastroStore`] (plus [`CadastroStore::form_mut`] for field edits).

use super::{CadastroClient, ClientError};
use crate::core::{Cadastro, CadastroForm, ValidationError, validate_cadastro};

#[derive(Debug)]
pub struct CadastroStore {
    client: CadastroClient,
    clientes: Vec<Cadastro>,
    form: CadastroForm,
    loading: bool,
    error: Option<String>,
    is_editing: bool,
}

impl CadastroStore {
    pub fn new(client: CadastroClient) -> Self {
        Self {
            client,
            clientes: Vec::new(),
            form: CadastroForm::default(),
            loading: false,
            error: None,
            is_editing: false,
        }
    }

    pub fn clientes(&self) -> &[Cadastro] {
        &self.clientes
    }

    pub fn form(&self) -> &CadastroForm {
        &self.form
    }

    /// Mutable access to the form fields for input binding.
    pub fn form_mut(&mut self) -> &mut CadastroForm {
        &mut self.form
    }

    /// True while a network action is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed action, cleared when the next one starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Clear the form back to its initial state and leave edit mode.
    pub fn reset_form(&mut self) {
        self.form = CadastroForm::default();
        self.is_editing = false;
        self.error = None;
    }

    /// Load the local record `id` into the form and enter edit mode.
    ///
    /// Returns `false` if `id` is not in the current list.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(cadastro) = self.clientes.iter().find(|c| c.id == id) else {
            return false;
        };
        self.form = CadastroForm::from(cadastro);
        self.is_editing = true;
        self.error = None;
        true
    }

    /// Replace the local list with the backend's.
    pub async fn fetch_clientes(&mut self) {
        self.begin();
        match self.client.list().await {
            Ok(clientes) => self.clientes = clientes,
            Err(e) => self.fail("Erro ao buscar clientes", &e),
        }
        self.loading = false;
    }

    /// Validate and submit the form: `PUT` when editing a saved record,
    /// `POST` otherwise. Resets the form on success.
    ///
    /// An invalid form is reported through [`CadastroStore::error`] and
    /// never reaches the network.
    pub async fn save_cliente(&mut self) -> bool {
        self.begin();

        let form = self.form.normalized();
        let errors = validate_cadastro(&form);
        if !errors.is_empty() {
            tracing::warn!(errors = %ValidationError::join(&errors), "form rejected before submit");
            self.error = Some(format!(
                "Erro ao salvar cadastro: {}",
                ValidationError::join(&errors)
            ));
            self.loading = false;
            return false;
        }

        let result = match form.id.as_deref() {
            Some(id) if self.is_editing => {
                let updated = self.client.update(id, &form).await;
                updated.map(|saved| self.replace_local(id, saved))
            }
            _ => {
                let created = self.client.create(&form).await;
                created.map(|saved| self.clientes.push(saved))
            }
        };

        let ok = match result {
            Ok(()) => {
                self.reset_form();
                true
            }
            Err(e) => {
                self.fail("Erro ao salvar cadastro", &e);
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Delete record `id` remotely, then drop it from the local list.
    pub async fn delete_cliente(&mut self, id: &str) -> bool {
        self.begin();
        let ok = match self.client.delete(id).await {
            Ok(()) => {
                self.clientes.retain(|c| c.id != id);
                true
            }
            Err(e) => {
                self.fail("Erro ao excluir cliente", &e);
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Flip the blocked flag of record `id`. Does nothing if `id` is not
    /// in the local list.
    pub async fn toggle_block_status(&mut self, id: &str) {
        self.begin();

        let Some(current) = self.clientes.iter().find(|c| c.id == id) else {
            tracing::debug!(id, "toggle requested for unknown cliente");
            self.loading = false;
            return;
        };
        let updated = CadastroForm::from(current).with_bloqueado_toggled();

        match self.client.update(id, &updated).await {
            Ok(saved) => self.replace_local(id, saved),
            Err(e) => self.fail("Erro ao atualizar status de bloqueio", &e),
        }
        self.loading = false;
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, context: &str, err: &ClientError) {
        tracing::error!(error = %err, "{context}");
        self.error = Some(format!("{context}: {}", err.message()));
    }

    fn replace_local(&mut self, id: &str, saved: Cadastro) {
        if let Some(existing) = self.clientes.iter_mut().find(|c| c.id == id) {
            *existing = saved;
        }
    }
}
