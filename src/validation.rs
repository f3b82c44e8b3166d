//! Validation helper functions for the grocery MCP server
//!
//! These are the input rules the add-item form enforces before anything
//! reaches the store: list type parsing, trimmed non-blank names and
//! quantity normalization.

use crate::grocery::ListType;
use mcp_attr::Result as McpResult;

/// Parse and validate a list type parameter
///
/// # Arguments
/// * `list_type_str` - List type label (e.g. "Priority", "Weekend Trip")
///
/// # Returns
/// Result containing parsed ListType or error
pub fn parse_list_type(list_type_str: &str) -> McpResult<ListType> {
    list_type_str.parse::<ListType>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Parse an optional list type, falling back to `Priority`
pub fn parse_list_type_or_default(list_type_str: Option<&str>) -> McpResult<ListType> {
    match list_type_str {
        Some(s) if !s.trim().is_empty() => parse_list_type(s),
        _ => Ok(ListType::default()),
    }
}

/// Validate an item name and return it trimmed
///
/// # Arguments
/// * `name` - Name as entered by the user
///
/// # Returns
/// The trimmed name, or an error if nothing is left after trimming
pub fn validate_item_name(name: &str) -> McpResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
                .with_message("Item name must not be empty".to_string(), true),
        );
    }
    Ok(trimmed.to_string())
}

/// Trim a quantity, dropping it entirely when blank so the store default applies
pub fn normalize_quantity(quantity: Option<String>) -> Option<String> {
    quantity
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

/// Normalize an item or receipt ID by trimming surrounding whitespace
pub fn normalize_id(id: &str) -> String {
    id.trim().to_string()
}

#[cfg(test)]
/// Extract ID from an add_item response message
///
/// Response format: "Item added with ID: <id> (list: <type>)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name_trims() {
        assert_eq!(validate_item_name("  Milk ").unwrap(), "Milk");
    }

    #[test]
    fn test_validate_item_name_rejects_blank() {
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
    }

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(None), None);
        assert_eq!(normalize_quantity(Some("  ".to_string())), None);
        assert_eq!(normalize_quantity(Some(" 3 ".to_string())), Some("3".to_string()));
    }

    #[test]
    fn test_parse_list_type_or_default() {
        assert_eq!(parse_list_type_or_default(None).unwrap(), ListType::Priority);
        assert_eq!(parse_list_type_or_default(Some("")).unwrap(), ListType::Priority);
        assert_eq!(
            parse_list_type_or_default(Some("Friends")).unwrap(),
            ListType::Friends
        );
        assert!(parse_list_type_or_default(Some("Pantry")).is_err());
    }

    #[test]
    fn test_extract_id_from_response() {
        assert_eq!(
            extract_id_from_response("Item added with ID: 12 (list: Priority)"),
            "12"
        );
    }
}
