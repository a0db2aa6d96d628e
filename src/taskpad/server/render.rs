//! Server-side page rendering.
//!
//! Builds the single HTML page from a snapshot of the store: banner, add
//! form, priority filter, and the task list with inline edit/delete forms.
//! Plain string building; the page works without any client scripting.

use crate::model::{Priority, Todo};

const PRIORITIES: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

pub fn render_page(
    todos: &[Todo],
    filter: &str,
    error: Option<&str>,
    success: Option<&str>,
) -> String {
    let mut page = String::with_capacity(2048);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n<title>Todo List</title>\n");
    page.push_str("</head>\n<body>\n<h1>Todo List</h1>\n");

    if let Some(message) = error {
        page.push_str("<div class=\"banner error\">");
        page.push_str(&escape(message));
        page.push_str("</div>\n");
    }
    if let Some(message) = success {
        page.push_str("<div class=\"banner success\">");
        page.push_str(&escape(message));
        page.push_str("</div>\n");
    }

    render_add_form(&mut page);
    render_filter_form(&mut page, filter);
    render_list(&mut page, todos);

    page.push_str("</body>\n</html>\n");
    page
}

fn render_add_form(page: &mut String) {
    page.push_str("<form class=\"add\" method=\"post\" action=\"/add\">\n");
    page.push_str("<input type=\"text\" name=\"task\" placeholder=\"Enter a new task\">\n");
    push_priority_select(page, Priority::Medium);
    page.push_str("<button type=\"submit\">Add Task</button>\n</form>\n");
}

fn render_filter_form(page: &mut String, filter: &str) {
    page.push_str("<form class=\"filter\" method=\"get\" action=\"/filter\">\n");
    page.push_str("<select name=\"priority\">\n");
    for value in ["All", "High", "Medium", "Low"] {
        page.push_str("<option value=\"");
        page.push_str(value);
        page.push('"');
        if value == filter {
            page.push_str(" selected");
        }
        page.push('>');
        page.push_str(value);
        page.push_str("</option>\n");
    }
    page.push_str("</select>\n<button type=\"submit\">Filter</button>\n</form>\n");
}

fn render_list(page: &mut String, todos: &[Todo]) {
    if todos.is_empty() {
        page.push_str("<p class=\"empty\">No tasks found.</p>\n");
        return;
    }
    page.push_str("<ul class=\"todos\">\n");
    for todo in todos {
        page.push_str("<li>\n<span class=\"text\">");
        page.push_str(&escape(&todo.text));
        page.push_str("</span> <span class=\"priority\">");
        page.push_str(todo.priority.as_str());
        page.push_str("</span>\n");

        page.push_str(&format!(
            "<form class=\"edit\" method=\"post\" action=\"/edit/{}\">\n",
            todo.id
        ));
        page.push_str("<input type=\"text\" name=\"task\" value=\"");
        page.push_str(&escape(&todo.text));
        page.push_str("\">\n");
        push_priority_select(page, todo.priority);
        page.push_str("<button type=\"submit\">Save</button>\n</form>\n");

        page.push_str(&format!(
            "<form class=\"delete\" method=\"post\" action=\"/delete/{}\">\n",
            todo.id
        ));
        page.push_str("<button type=\"submit\">Delete</button>\n</form>\n</li>\n");
    }
    page.push_str("</ul>\n");
}

fn push_priority_select(page: &mut String, selected: Priority) {
    page.push_str("<select name=\"priority\">\n");
    for priority in PRIORITIES {
        page.push_str("<option value=\"");
        page.push_str(priority.as_str());
        page.push('"');
        if priority == selected {
            page.push_str(" selected");
        }
        page.push('>');
        page.push_str(priority.as_str());
        page.push_str("</option>\n");
    }
    page.push_str("</select>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
