//! List items handler for the grocery MCP server

use crate::GroceryServerHandler;
use crate::formatting;
use crate::grocery::Item;
use crate::validation;
use mcp_attr::Result as McpResult;

impl GroceryServerHandler {
    /// Handles list/filter operations - applies filters and formats results for display.
    ///
    /// Without a list type both collections are shown, priority first.
    pub async fn handle_list_items(
        &self,
        list_type: Option<String>,
        keyword: Option<String>,
        hide_checked: Option<bool>,
    ) -> McpResult<String> {
        let list_filter = if let Some(ref list_type_str) = list_type {
            Some(validation::parse_list_type(list_type_str)?)
        } else {
            None
        };

        let store = self.lock_store()?;
        let mut sections: Vec<(String, Vec<Item>)> = match list_filter {
            Some(list_type) => vec![(
                format!("{} Items", list_type),
                store.items_of(list_type).into_iter().cloned().collect(),
            )],
            None => vec![
                ("Priority Items".to_string(), store.priority_items().to_vec()),
                ("Friends".to_string(), store.friends_items().to_vec()),
            ],
        };
        drop(store);

        for (_, items) in sections.iter_mut() {
            if let Some(ref keyword_filter) = keyword {
                formatting::apply_keyword_filter(items, keyword_filter);
            }
            if hide_checked.unwrap_or(false) {
                formatting::apply_unchecked_filter(items);
            }
        }

        let rendered: Vec<String> = sections
            .iter()
            .map(|(title, items)| formatting::format_item_section(title, items))
            .collect();
        Ok(rendered.join("\n").trim_end().to_string())
    }
}
