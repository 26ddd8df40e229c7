//! Intent parser for user input lines
//!
//! Parses text commands like `delete-order 3` or
//! `add-cake 0 Vanilla Buttercream 2 Round`. Multi-word arguments go in
//! double quotes. A line starting with `{` is read as a JSON intent instead.

use serde::Deserialize;

use crate::domain::entities::{CakeId, OrderId};
use crate::error::ParseError;

/// Requests a user can make of the tracker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// Create a new, empty order
    CreateOrder {
        name: String,
        baker: String,
        delivery_date: String,
    },

    /// Add a cake to an existing order
    AddCake {
        order_id: OrderId,
        flavor: String,
        frosting: String,
        layers: String,
        #[serde(default)]
        shape: Option<String>,
    },

    /// Delete an order and its cakes
    DeleteOrder { order_id: OrderId },

    /// Delete one cake from an order
    DeleteCake { order_id: OrderId, cake_id: CakeId },

    /// Re-render the current state
    Refresh,

    /// Show available commands
    Help,

    /// Stop reading input
    Quit,
}

impl Intent {
    /// Whether handling this intent changes the order store
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Intent::CreateOrder { .. }
                | Intent::AddCake { .. }
                | Intent::DeleteOrder { .. }
                | Intent::DeleteCake { .. }
        )
    }
}

/// Parse an intent from one line of input
pub fn parse_intent(input: &str) -> Result<Intent, ParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ParseError::UnknownCommand("empty input".to_string()));
    }

    if input.starts_with('{') {
        return Ok(serde_json::from_str(input)?);
    }

    let parts = split_args(input)?;
    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    match command.as_str() {
        "create-order" | "new-order" | "order" => {
            if args.len() < 3 {
                return Err(ParseError::MissingArgument(
                    "create-order (usage: create-order <name> <baker> <delivery-date>)"
                        .to_string(),
                ));
            }
            reject_extra(&command, args, 3)?;
            Ok(Intent::CreateOrder {
                name: args[0].clone(),
                baker: args[1].clone(),
                delivery_date: args[2].clone(),
            })
        }

        "add-cake" | "cake" => {
            if args.len() < 4 {
                return Err(ParseError::MissingArgument(
                    "add-cake (usage: add-cake <order-id> <flavor> <frosting> <layers> [shape])"
                        .to_string(),
                ));
            }
            reject_extra(&command, args, 5)?;
            Ok(Intent::AddCake {
                order_id: OrderId(parse_id(&args[0])?),
                flavor: args[1].clone(),
                frosting: args[2].clone(),
                layers: args[3].clone(),
                shape: args.get(4).cloned(),
            })
        }

        "delete-order" | "rm-order" => {
            if args.is_empty() {
                return Err(ParseError::MissingArgument("delete-order".to_string()));
            }
            reject_extra(&command, args, 1)?;
            Ok(Intent::DeleteOrder {
                order_id: OrderId(parse_id(&args[0])?),
            })
        }

        "delete-cake" | "rm-cake" => {
            if args.len() < 2 {
                return Err(ParseError::MissingArgument(
                    "delete-cake (usage: delete-cake <order-id> <cake-id>)".to_string(),
                ));
            }
            reject_extra(&command, args, 2)?;
            Ok(Intent::DeleteCake {
                order_id: OrderId(parse_id(&args[0])?),
                cake_id: CakeId(parse_id(&args[1])?),
            })
        }

        "refresh" | "list" | "ls" => Ok(Intent::Refresh),

        "help" | "?" => Ok(Intent::Help),

        "quit" | "exit" | "q" => Ok(Intent::Quit),

        _ => Err(ParseError::UnknownCommand(command)),
    }
}

/// Identifiers may be written with a leading `#`, as the views print them
fn parse_id(arg: &str) -> Result<u64, ParseError> {
    Ok(arg.strip_prefix('#').unwrap_or(arg).parse::<u64>()?)
}

fn reject_extra(command: &str, args: &[String], max: usize) -> Result<(), ParseError> {
    if args.len() > max {
        return Err(ParseError::InvalidArgument(format!(
            "{} takes at most {} arguments, got {} (quote values containing spaces)",
            command,
            max,
            args.len()
        )));
    }
    Ok(())
}

/// Split a command line on whitespace, keeping double-quoted runs together
fn split_args(input: &str) -> Result<Vec<String>, ParseError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                // `""` is an explicit empty argument
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    parts.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::InvalidArgument(
            "unterminated quote".to_string(),
        ));
    }
    if pending {
        parts.push(current);
    }

    Ok(parts)
}

/// Generate help text for available commands
pub fn help_text() -> String {
    r#"# Available Commands

## Orders
- `create-order <name> <baker> <delivery-date>` - Create a new order
- `delete-order <order-id>` - Delete an order and all of its cakes

## Cakes
- `add-cake <order-id> <flavor> <frosting> <layers> [shape]` - Add a cake to an order
- `delete-cake <order-id> <cake-id>` - Remove a cake from an order

## Other
- `refresh` - Render the current orders again
- `help` - Show this help message
- `quit` - Exit

---
Quote values that contain spaces, e.g. `create-order "Smith wedding" Ana 2024-05-01`.
JSON works too: `{"type":"deleteOrder","orderId":3}`.
"#
    .to_string()
}
