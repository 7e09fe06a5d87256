use serde::{Deserialize, Serialize};

use crate::documento::digits_only;

/// A customer record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadastro {
    /// Backend-assigned identifier. Numeric ids are read as their decimal string.
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    /// Person name or company legal name (Nome/Razão Social).
    pub nome: String,
    /// CPF or CNPJ, digits only.
    pub documento: String,
    pub telefone: String,
    /// Blocked customers stay listed but cannot transact.
    #[serde(default)]
    pub bloqueado: bool,
}

/// Editable form state for creating or updating a [`Cadastro`].
///
/// `id` is `None` for a record that has not been saved yet.
/// `Default` is the empty initial form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadastroForm {
    pub id: Option<String>,
    pub nome: String,
    pub documento: String,
    pub telefone: String,
    #[serde(default)]
    pub bloqueado: bool,
}

impl CadastroForm {
    /// Copy of this form with document punctuation stripped and name trimmed.
    ///
    /// The backend stores documents as bare digits.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            nome: self.nome.trim().to_string(),
            documento: digits_only(&self.documento),
            telefone: self.telefone.trim().to_string(),
            bloqueado: self.bloqueado,
        }
    }

    /// Copy of this form with the blocked flag flipped.
    pub fn with_bloqueado_toggled(&self) -> Self {
        Self {
            bloqueado: !self.bloqueado,
            ..self.clone()
        }
    }
}

impl From<&Cadastro> for CadastroForm {
    fn from(c: &Cadastro) -> Self {
        Self {
            id: Some(c.id.clone()),
            nome: c.nome.clone(),
            documento: c.documento.clone(),
            telefone: c.telefone.clone(),
            bloqueado: c.bloqueado,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Paginated list response from `GET /cliente`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClienteListResponse {
    #[serde(default)]
    pub clientes: Vec<Cadastro>,
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub items_per_page: u32,
}

/// Body of `GET /cliente`: older backends answer with a bare array,
/// newer ones with a [`ClienteListResponse`] page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClienteList {
    Plain(Vec<Cadastro>),
    Paged(ClienteListResponse),
}

impl ClienteList {
    pub fn into_clientes(self) -> Vec<Cadastro> {
        match self {
            Self::Paged(page) => page.clientes,
            Self::Plain(list) => list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cadastro() -> Cadastro {
        Cadastro {
            id: "42".into(),
            nome: "Maria da Silva".into(),
            documento: "11144477735".into(),
            telefone: "11987654321".into(),
            bloqueado: false,
        }
    }

    #[test]
    fn form_default_is_empty() {
        let form = CadastroForm::default();
        assert_eq!(form.id, None);
        assert!(form.nome.is_empty());
        assert!(form.documento.is_empty());
        assert!(!form.bloqueado);
    }

    #[test]
    fn form_from_cadastro() {
        let form = CadastroForm::from(&cadastro());
        assert_eq!(form.id.as_deref(), Some("42"));
        assert_eq!(form.documento, "11144477735");
    }

    #[test]
    fn normalized_strips_document_mask() {
        let form = CadastroForm {
            nome: "  Maria  ".into(),
            documento: "111.444.777-35".into(),
            ..Default::default()
        };
        let n = form.normalized();
        assert_eq!(n.nome, "Maria");
        assert_eq!(n.documento, "11144477735");
    }

    #[test]
    fn toggle_flips_only_bloqueado() {
        let form = CadastroForm::from(&cadastro());
        let toggled = form.with_bloqueado_toggled();
        assert!(toggled.bloqueado);
        assert_eq!(toggled.nome, form.nome);
        assert!(!toggled.with_bloqueado_toggled().bloqueado);
    }

    #[test]
    fn cadastro_missing_bloqueado_defaults_false() {
        let json = r#"{"id":"1","nome":"A","documento":"11144477735","telefone":""}"#;
        let c: Cadastro = serde_json::from_str(json).unwrap();
        assert!(!c.bloqueado);
    }

    #[test]
    fn numeric_id_read_as_string() {
        let json = r#"{"id":7,"nome":"A","documento":"11144477735","telefone":""}"#;
        let c: Cadastro = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "7");
    }

    #[test]
    fn list_accepts_paged_body() {
        let json = r#"{
            "clientes": [{"id":"1","nome":"A","documento":"11144477735","telefone":"","bloqueado":true}],
            "totalItems": 1, "totalPages": 1, "currentPage": 1, "itemsPerPage": 10
        }"#;
        let list: ClienteList = serde_json::from_str(json).unwrap();
        match &list {
            ClienteList::Paged(page) => {
                assert_eq!(page.total_items, 1);
                assert_eq!(page.items_per_page, 10);
            }
            other => panic!("expected paged list, got {other:?}"),
        }
        let clientes = list.into_clientes();
        assert_eq!(clientes.len(), 1);
        assert!(clientes[0].bloqueado);
    }

    #[test]
    fn list_accepts_plain_array() {
        let json = r#"[{"id":"1","nome":"A","documento":"11144477735","telefone":""}]"#;
        let list: ClienteList = serde_json::from_str(json).unwrap();
        assert!(matches!(list, ClienteList::Plain(_)));
        assert_eq!(list.into_clientes()[0].nome, "A");
    }

    #[test]
    fn form_serializes_null_id() {
        let json = serde_json::to_value(CadastroForm::default()).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["bloqueado"], false);
    }
}
