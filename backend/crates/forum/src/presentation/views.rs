//! HTML Views
//!
//! Plain render functions returning `Html<String>`. User-supplied text is
//! escaped here, at the output boundary, never at input time.

use axum::response::Html;

use crate::domain::entity::post::FeedItem;
use crate::domain::entity::user::User;
use crate::presentation::forms::{FieldError, SignUpForm};

/// Escape text for HTML element and attribute context.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, current_user: Option<&User>, main: &str) -> Html<String> {
    let nav = match current_user {
        Some(user) => format!(
            concat!(
                r#"<span>hello, {}</span> "#,
                r#"<a href="/upgrade-status">upgrade status</a> "#,
                r#"<a href="/log-out">log out</a>"#
            ),
            escape(&user.full_name())
        ),
        None => concat!(
            r#"<a href="/sign-up">sign up</a> "#,
            r#"<a href="/log-in">log in</a>"#
        )
        .to_string(),
    };

    Html(format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8"><title>{title}</title></head>"#,
            "<body>\n",
            r#"<nav><a href="/">clubhouse</a> | {nav}</nav>"#,
            "\n<main>\n{main}\n</main>\n</body></html>"
        ),
        title = escape(title),
        nav = nav,
        main = main,
    ))
}

fn error_list(errors: &[FieldError]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e.message)))
        .collect();

    format!(r#"<ul class="errors">{}</ul>"#, items)
}

// ============================================================================
// Feed
// ============================================================================

/// The feed page: all posts newest-first plus the new-post form.
///
/// `errors` is non-empty only when a new-post submission failed validation
/// and the page is being redisplayed.
pub fn feed_page(
    current_user: Option<&User>,
    items: &[FeedItem],
    errors: &[FieldError],
) -> Html<String> {
    let mut main = String::new();

    main.push_str("<h1>posts</h1>\n");

    if items.is_empty() {
        main.push_str("<p>no posts yet</p>\n");
    } else {
        main.push_str("<ul>\n");
        for item in items {
            // A post whose author no longer resolves still renders.
            let author = item
                .author_full_name
                .as_deref()
                .unwrap_or("anonymous");

            main.push_str(&format!(
                concat!(
                    "<li><article>",
                    "<h2>{title}</h2>",
                    "<p>{body}</p>",
                    r#"<footer>by {author} on {date}</footer>"#,
                    "</article></li>\n"
                ),
                title = escape(&item.post.title),
                body = escape(&item.post.body),
                author = escape(author),
                date = item.post.created_at.format("%Y-%m-%d %H:%M"),
            ));
        }
        main.push_str("</ul>\n");
    }

    main.push_str("<h2>new post</h2>\n");
    main.push_str(&error_list(errors));
    main.push_str(concat!(
        r#"<form method="post" action="/new-post">"#,
        r#"<label>title <input type="text" name="title"></label>"#,
        r#"<label>body <textarea name="post_body"></textarea></label>"#,
        r#"<button type="submit">post</button>"#,
        "</form>\n"
    ));

    layout("clubhouse", current_user, &main)
}

// ============================================================================
// Sign Up
// ============================================================================

pub fn sign_up_page(form: &SignUpForm, errors: &[FieldError]) -> Html<String> {
    let main = format!(
        concat!(
            "<h1>sign up</h1>\n{errors}",
            r#"<form method="post" action="/sign-up">"#,
            r#"<label>first name <input type="text" name="firstname" value="{firstname}"></label>"#,
            r#"<label>last name <input type="text" name="lastname" value="{lastname}"></label>"#,
            r#"<label>username <input type="text" name="username" value="{username}"></label>"#,
            r#"<label>password <input type="password" name="password"></label>"#,
            r#"<button type="submit">sign up</button>"#,
            "</form>\n"
        ),
        errors = error_list(errors),
        firstname = escape(&form.firstname),
        lastname = escape(&form.lastname),
        username = escape(&form.username),
    );

    layout("sign up", None, &main)
}

// ============================================================================
// Log In
// ============================================================================

pub fn log_in_page() -> Html<String> {
    let main = concat!(
        "<h1>log in</h1>\n",
        r#"<form method="post" action="/log-in">"#,
        r#"<label>username <input type="text" name="username"></label>"#,
        r#"<label>password <input type="password" name="password"></label>"#,
        r#"<button type="submit">log in</button>"#,
        "</form>\n"
    );

    layout("log in", None, main)
}

// ============================================================================
// Upgrade Status
// ============================================================================

pub fn upgrade_page(current_user: Option<&User>, message: &str) -> Html<String> {
    let banner = if message.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>\n", escape(message))
    };

    let main = format!(
        concat!(
            "<h1>upgrade status</h1>\n{banner}",
            r#"<form method="post" action="/upgrade-status">"#,
            r#"<label>admin password <input type="password" name="admin_pwd"></label>"#,
            r#"<button type="submit">upgrade</button>"#,
            "</form>\n"
        ),
        banner = banner,
    );

    layout("upgrade status", current_user, &main)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::post::{FeedItem, Post};

    #[test]
    fn test_escape_replaces_html_metacharacters() {
        assert_eq!(
            escape(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_feed_escapes_post_content() {
        let item = FeedItem {
            post: Post::new("<script>".to_string(), "a & b".to_string(), None),
            author_username: None,
            author_full_name: Some("Eve <i>".to_string()),
        };

        let Html(page) = feed_page(None, &[item], &[]);
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &amp; b"));
        assert!(page.contains("Eve &lt;i&gt;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_feed_renders_missing_author_as_anonymous() {
        let item = FeedItem {
            post: Post::new("Hello".to_string(), "World".to_string(), None),
            author_username: None,
            author_full_name: None,
        };

        let Html(page) = feed_page(None, &[item], &[]);
        assert!(page.contains("by anonymous"));
    }

    #[test]
    fn test_sign_up_page_redisplays_values_and_errors() {
        let form = SignUpForm {
            firstname: "Alice".to_string(),
            ..Default::default()
        };
        let errors = vec![FieldError {
            field: "lastname",
            message: "last name must not be empty",
        }];

        let Html(page) = sign_up_page(&form, &errors);
        assert!(page.contains(r#"value="Alice""#));
        assert!(page.contains("last name must not be empty"));
        // The password field is never echoed back.
        assert!(!page.contains(r#"name="password" value"#));
    }

    #[test]
    fn test_upgrade_page_message_banner() {
        let Html(empty) = upgrade_page(None, "");
        assert!(!empty.contains("<p>"));

        let Html(wrong) = upgrade_page(None, "wrong password");
        assert!(wrong.contains("wrong password"));
    }
}
