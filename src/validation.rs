use crate::endpoint::{EndpointKind, EndpointSpec, ModelCatalog};

/// Whether `model` is acceptable for the resolved endpoint.
///
/// Closed catalogs require exact membership. Open catalogs accept any
/// non-blank name, with the suggestion list checked first so the curated
/// entries stay valid even if they were ever blanked out.
pub fn is_valid_model(model: &str, endpoint: &EndpointSpec) -> bool {
    match endpoint.models {
        ModelCatalog::Fixed(list) => list.contains(&model),
        ModelCatalog::Open { suggestions } => {
            suggestions.contains(&model) || !model.trim().is_empty()
        }
    }
}

/// Whether `api_key` satisfies the endpoint's credential contract.
///
/// Local ollama needs no real credential at all. Everywhere else a blank
/// key is rejected, and endpoints with a known key format additionally
/// require their prefix. Returns a plain boolean; the caller decides
/// whether a rejection blocks or merely warns.
pub fn is_valid_api_key(api_key: &str, endpoint: &EndpointSpec) -> bool {
    if endpoint.kind == EndpointKind::Ollama {
        return true;
    }

    if api_key.trim().is_empty() {
        return false;
    }

    if endpoint.required_key_prefix.is_empty() {
        return true;
    }

    api_key.starts_with(endpoint.required_key_prefix)
}
