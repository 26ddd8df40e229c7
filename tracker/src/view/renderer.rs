//! Snapshot renderers
//!
//! Every renderer is a pure function of the snapshot. Nothing here keeps
//! state between calls.

use crate::domain::entities::{Cake, Order};
use crate::error::AppError;

/// Render a snapshot to HTML markup, one card per order
pub fn render_html(snapshot: &[Order]) -> String {
    let mut buf = String::new();

    buf.push_str("<div id=\"app\">\n");
    for order in snapshot {
        buf.push_str(&render_order_box(order));
    }
    buf.push_str("</div>\n");

    buf
}

fn render_order_box(order: &Order) -> String {
    format!(
        "<div class=\"card\">\n\
         <div class=\"card-header\">\n{}</div>\n\
         <div class=\"card-body\">\n{}{}</div>\n\
         </div>\n",
        render_order_header(order),
        render_new_cake_form(order),
        render_cakes(order),
    )
}

fn render_order_header(order: &Order) -> String {
    format!(
        "<div class=\"row\">\n\
         <div class=\"col-8\"><h3>{} / Baker: {} / Delivery Date: {}</h3></div>\n\
         <div class=\"col-4\"><button class=\"delete-order btn btn-danger\" \
         id=\"delete-order-{id}\" data-order-id=\"{id}\">Delete Order</button></div>\n\
         </div>\n",
        escape_html(&order.name),
        escape_html(&order.baker),
        escape_html(&order.delivery_date),
        id = order.id,
    )
}

fn render_new_cake_form(order: &Order) -> String {
    let mut buf = String::new();

    for field in ["flavor", "frosting", "layers", "shape"] {
        buf.push_str(&format!(
            "<div class=\"form-group\">\
             <label for=\"new-cake-{field}-{id}\">{label}:</label><br>\
             <input class=\"form-control\" type=\"text\" id=\"new-cake-{field}-{id}\">\
             </div>\n",
            field = field,
            label = capitalize(field),
            id = order.id,
        ));
    }
    buf.push_str(&format!(
        "<div class=\"form-group\"><button class=\"form-control btn btn-primary\" \
         id=\"add-cake-for-order-{id}\" data-order-id=\"{id}\">Add New Cake</button></div>\n",
        id = order.id,
    ));

    buf
}

fn render_cakes(order: &Order) -> String {
    order
        .cakes
        .iter()
        .map(|cake| render_cake(order, cake))
        .collect()
}

fn render_cake(order: &Order, cake: &Cake) -> String {
    let mut items = format!(
        "<li>Flavor: {}</li><li>Frosting: {}</li><li>Layers: {}</li>",
        escape_html(&cake.flavor),
        escape_html(&cake.frosting),
        escape_html(&cake.layers),
    );
    if let Some(shape) = &cake.shape {
        items.push_str(&format!("<li>Shape: {}</li>", escape_html(shape)));
    }

    format!(
        "<div class=\"row\">\n\
         <div class=\"col-8\"><ul>{}</ul></div>\n\
         <div class=\"col-4\"><button class=\"delete-cake btn btn-danger\" \
         id=\"delete-cake-{cake_id}\" data-cake-id=\"{cake_id}\" \
         data-order-id=\"{order_id}\">Delete Cake</button></div>\n\
         </div>\n",
        items,
        cake_id = cake.id,
        order_id = order.id,
    )
}

/// Render a snapshot as a markdown listing
pub fn render_markdown(snapshot: &[Order]) -> String {
    let mut buf = String::new();

    buf.push_str("# Bakery Orders\n\n");

    if snapshot.is_empty() {
        buf.push_str("_No orders yet._\n\n");
        buf.push_str("Use `create-order <name> <baker> <delivery-date>` to add one.\n");
        return buf;
    }

    for order in snapshot {
        buf.push_str(&format!(
            "## [#{}] {}\n\n- **Baker:** {}\n- **Delivery Date:** {}\n\n",
            order.id, order.name, order.baker, order.delivery_date
        ));

        if order.cakes.is_empty() {
            buf.push_str("_No cakes._\n\n");
            continue;
        }

        for cake in &order.cakes {
            let shape = cake
                .shape
                .as_ref()
                .map(|s| format!(" | Shape: {}", s))
                .unwrap_or_default();
            buf.push_str(&format!(
                "- [#{}] Flavor: {} | Frosting: {} | Layers: {}{}\n",
                cake.id, cake.flavor, cake.frosting, cake.layers, shape
            ));
        }
        buf.push('\n');
    }

    buf
}

/// Render a snapshot as a pretty JSON array
pub fn render_json(snapshot: &[Order]) -> Result<String, AppError> {
    let mut json = serde_json::to_string_pretty(snapshot)?;
    json.push('\n');
    Ok(json)
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
