//! View Layer
//!
//! Server-rendered HTML for every routed page. Functions here are pure: they
//! take loader data and return markup. All user-provided text goes through
//! `escape`.

pub mod escape;


use crate::contacts::Contact;
use crate::routes::protocol::{contact_path, destroy_path, edit_path};
pub use escape::escape;

const STYLE: &str = include_str!("style.css");

/// The root layout: sidebar with search, "New" and the contact list, plus the detail pane.
pub fn layout(contacts: &[Contact], query: Option<&str>, active_id: Option<&str>, detail: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Contacts</title>
<style>{style}</style>
</head>
<body>
<div id="sidebar">
  <h1>Contacts</h1>
  <div>
    <form id="search-form" role="search" method="get" action="/">
      <input id="q" aria-label="Search contacts" placeholder="Search" type="search" name="q" value="{query}">
    </form>
    <form method="post" action="/">
      <button type="submit">New</button>
    </form>
  </div>
  <nav>
{nav}
  </nav>
</div>
<div id="detail">
{detail}
</div>
</body>
</html>
"#,
        style = STYLE,
        query = escape(query.unwrap_or_default()),
        nav = contact_list(contacts, active_id),
        detail = detail,
    )
}

fn contact_list(contacts: &[Contact], active_id: Option<&str>) -> String {
    if contacts.is_empty() {
        return "    <p><i>No contacts</i></p>".to_string();
    }

    let items: Vec<String> = contacts
        .iter()
        .map(|contact| {
            let class = if Some(contact.id.as_str()) == active_id {
                r#" class="active""#
            } else {
                ""
            };
            let star = if contact.favorite { " <span>★</span>" } else { "" };
            format!(
                r#"      <li><a href="{href}"{class}>{name}{star}</a></li>"#,
                href = escape(&contact_path(&contact.id)),
                class = class,
                name = display_name(contact),
                star = star,
            )
        })
        .collect();

    format!("    <ul>\n{}\n    </ul>", items.join("\n"))
}

fn display_name(contact: &Contact) -> String {
    match contact.full_name() {
        Some(name) => escape(&name),
        None => "<i>No Name</i>".to_string(),
    }
}

/// Zero state shown when no contact is selected.
pub fn index() -> String {
    r#"<p id="zero-state">
  This is a contact manager demo.
  <br>
  Pick a contact on the left, or press <b>New</b> to create one.
</p>"#
        .to_string()
}

pub fn contact_detail(contact: &Contact) -> String {
    let twitter = if contact.twitter.is_empty() {
        String::new()
    } else {
        format!(
            r#"
    <p><a target="_blank" href="https://twitter.com/{handle}">{text}</a></p>"#,
            handle = escape(&contact.twitter),
            text = escape(&contact.twitter),
        )
    };
    let notes = if contact.notes.is_empty() {
        String::new()
    } else {
        format!("\n    <p>{}</p>", escape(&contact.notes))
    };

    format!(
        r#"<div id="contact">
  <div>
    <img src="{avatar}" alt="">
  </div>
  <div>
    <h1>{name} {favorite}</h1>{twitter}{notes}
    <div>
      <form method="get" action="{edit}">
        <button type="submit">Edit</button>
      </form>
      <form method="post" action="{destroy}" onsubmit="return confirm('Please confirm you want to delete this record.');">
        <button type="submit">Delete</button>
      </form>
    </div>
  </div>
</div>"#,
        avatar = escape(&contact.avatar_url()),
        name = display_name(contact),
        favorite = favorite_form(contact),
        twitter = twitter,
        notes = notes,
        edit = escape(&edit_path(&contact.id)),
        destroy = escape(&destroy_path(&contact.id)),
    )
}

/// The star button. Submits the inverted state to the contact's own route.
fn favorite_form(contact: &Contact) -> String {
    let (value, label, star) = if contact.favorite {
        ("false", "Remove from favorites", "★")
    } else {
        ("true", "Add to favorites", "☆")
    };
    format!(
        r#"<form method="post" action="{action}" style="display:inline"><button name="favorite" value="{value}" aria-label="{label}">{star}</button></form>"#,
        action = escape(&contact_path(&contact.id)),
        value = value,
        label = label,
        star = star,
    )
}

pub fn edit_form(contact: &Contact) -> String {
    format!(
        r#"<form method="post" id="contact-form" action="{action}">
  <p>
    <span>Name</span>
    <input placeholder="First" aria-label="First name" type="text" name="first" value="{first}">
    <input placeholder="Last" aria-label="Last name" type="text" name="last" value="{last}">
  </p>
  <label>
    <span>Twitter</span>
    <input type="text" name="twitter" placeholder="@jack" value="{twitter}">
  </label>
  <label>
    <span>Avatar URL</span>
    <input placeholder="https://example.com/avatar.jpg" aria-label="Avatar URL" type="text" name="avatar" value="{avatar}">
  </label>
  <label>
    <span>Notes</span>
    <textarea name="notes" rows="6">{notes}</textarea>
  </label>
  <p>
    <button type="submit">Save</button>
    <a href="{cancel}">Cancel</a>
  </p>
</form>"#,
        action = escape(&edit_path(&contact.id)),
        first = escape(&contact.first),
        last = escape(&contact.last),
        twitter = escape(&contact.twitter),
        avatar = escape(&contact.avatar),
        notes = escape(&contact.notes),
        cancel = escape(&contact_path(&contact.id)),
    )
}

/// Error shown in the detail pane when a contact route fails. The sidebar stays.
pub fn error_fragment(detail: &str) -> String {
    format!(
        r#"<div id="error-page">
  <h1>Oops!</h1>
  <p>Sorry, an unexpected error has occurred.</p>
  <p><i>{detail}</i></p>
</div>"#,
        detail = escape(detail),
    )
}

/// Contextual error for a failed delete.
pub fn destroy_error() -> String {
    r#"<div id="error-page">Oops! There was an error.</div>"#.to_string()
}

/// Standalone error document for failures outside any contact route.
pub fn error_page(detail: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Error</title>
<style>{style}</style>
</head>
<body>
<div id="error-page">
  <h1>Oops!</h1>
  <p>Sorry, an unexpected error has occurred.</p>
  <p><i>{detail}</i></p>
  <p><a href="/">Back to contacts</a></p>
</div>
</body>
</html>
"#,
        style = STYLE,
        detail = escape(detail),
    )
}
