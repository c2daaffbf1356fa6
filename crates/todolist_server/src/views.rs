//! HTML rendering for the list and edit views.
//!
//! # Responsibility
//! - Turn an ordered task sequence into complete HTML pages.
//! - Escape task content so stored text can never inject markup.
//!
//! Rendering stays string-based and self-contained; the route layer hands
//! in plain `Task` values and nothing else.

use todolist_core::Task;

/// Renders the main list view: a create form plus one row per task.
pub fn render_task_list(tasks: &[Task]) -> String {
    let mut rows = String::new();
    for task in tasks {
        rows.push_str(&task_row(task));
    }
    page("To-do list", &format!("{}{rows}", create_form()))
}

/// Renders the edit view: the same list, with the row matching `target_id`
/// replaced by an inline edit form.
///
/// `target_id` is compared textually; a non-matching or unparsable id
/// renders a page identical to the list view.
pub fn render_task_edit(tasks: &[Task], target_id: &str) -> String {
    let mut rows = String::new();
    for task in tasks {
        if task.id.to_string() == target_id {
            rows.push_str(&edit_row(task));
        } else {
            rows.push_str(&task_row(task));
        }
    }
    page("Edit task", &format!("{}{rows}", create_form()))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/static/styles.css\">\n\
         </head>\n\
         <body>\n\
         <main class=\"todo\">\n\
         <h1>{title}</h1>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

fn create_form() -> String {
    "<form class=\"todo-create\" action=\"/\" method=\"post\">\n\
     <input type=\"text\" name=\"content\" placeholder=\"What needs doing?\">\n\
     <button type=\"submit\">Add</button>\n\
     </form>\n"
        .to_string()
}

fn task_row(task: &Task) -> String {
    let id = task.id;
    format!(
        "<div class=\"todo-item\">\n\
         <span class=\"todo-content\">{}</span>\n\
         <a class=\"todo-edit\" href=\"/edit/{id}\">edit</a>\n\
         <a class=\"todo-remove\" href=\"/remove/{id}\">remove</a>\n\
         </div>\n",
        escape_html(&task.content)
    )
}

fn edit_row(task: &Task) -> String {
    let id = task.id;
    format!(
        "<form class=\"todo-item todo-item-editing\" action=\"/edit/{id}\" method=\"post\">\n\
         <input type=\"text\" name=\"content\" value=\"{}\">\n\
         <button type=\"submit\">Save</button>\n\
         </form>\n",
        escape_html(&task.content)
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::{escape_html, render_task_edit, render_task_list};
    use todolist_core::Task;
    use uuid::Uuid;

    fn sample_task(content: &str) -> Task {
        Task::new(content)
    }

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b onclick="x('&')">"#),
            "&lt;b onclick=&quot;x(&#39;&amp;&#39;)&quot;&gt;"
        );
    }

    #[test]
    fn list_view_contains_every_task_and_its_links() {
        let tasks = vec![sample_task("buy milk"), sample_task("walk dog")];
        let html = render_task_list(&tasks);

        assert!(html.contains("buy milk"));
        assert!(html.contains("walk dog"));
        for task in &tasks {
            assert!(html.contains(&format!("/edit/{}", task.id)));
            assert!(html.contains(&format!("/remove/{}", task.id)));
        }
    }

    #[test]
    fn list_view_escapes_stored_content() {
        let html = render_task_list(&[sample_task("<script>alert(1)</script>")]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn edit_view_swaps_target_row_for_a_form() {
        let target = sample_task("edit me");
        let other = sample_task("leave me");
        let html = render_task_edit(&[target.clone(), other.clone()], &target.id.to_string());

        assert!(html.contains(&format!("action=\"/edit/{}\"", target.id)));
        assert!(html.contains("value=\"edit me\""));
        // The other row stays a plain list entry.
        assert!(html.contains(&format!("/edit/{}\">edit</a>", other.id)));
    }

    #[test]
    fn edit_view_with_unknown_id_renders_plain_rows() {
        let task = sample_task("only row");
        let html = render_task_edit(&[task], &Uuid::new_v4().to_string());
        assert!(!html.contains("todo-item-editing"));
    }
}
