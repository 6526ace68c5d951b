//! HTML output formatter for review listings.
//!
//! Produces a standalone page styled with UIkit, one card per review. Review
//! text is HTML-escaped by the template engine.

use crate::data::Review;
use crate::error::ReviewError;
use handlebars::Handlebars;
use serde_json::json;

/// Opening tag of the table inside every review card.
pub const CARD_TABLE_MARKER: &str = r#"<table class="uk-table"#;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Reviews for {{app_id}}</title>
        <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/uikit@3.7.1/dist/css/uikit.min.css" />
        <script src="https://cdn.jsdelivr.net/npm/uikit@3.7.1/dist/js/uikit.min.js"></script>
        <script src="https://cdn.jsdelivr.net/npm/uikit@3.7.1/dist/js/uikit-icons.min.js"></script>
    </head>
    <body>
        <div class="uk-container uk-container-large uk-padding">
            <h1 class="uk-h1">Reviews for {{app_id}}</h1>
            <p class="uk-text-lead">Reviews coming from ODRS.</p>
{{#each reviews}}
            <div class="uk-card uk-card-default uk-card-body">
                <table class="uk-table uk-table-divider uk-table-hover">
                    <tr>
                        <th>Date Created</th>
                        <th>Distro</th>
                        <th>Karma</th>
                        <th>Locale</th>
                        <th>Rating</th>
                        <th>Reported</th>
                        <th>Review ID</th>
                        <th>Summary</th>
                        <th>User Name</th>
                        <th>Version</th>
                    </tr>
                    <tr>
                        <td>{{date_created}}</td>
                        <td>{{distro}}</td>
                        <td><span uk-icon="arrow-up"></span>{{karma_up}}/<span uk-icon="arrow-down"></span>{{karma_down}}</td>
                        <td>{{locale}}</td>
                        <td>{{rating}}</td>
                        <td>{{reported}}</td>
                        <td>{{review_id}}</td>
                        <td>{{summary}}</td>
                        <td>{{user_display}}</td>
                        <td>{{version}}</td>
                    </tr>
                </table>
                <p class="uk-text-default">{{description}}</p>
            </div>
            <hr class="uk-divider-icon" />
{{/each}}
        </div>
    </body>
</html>
"#;

/// Renders reviews into a complete HTML document.
///
/// # Arguments
/// * `app_id` - Application identifier shown in the title and heading
/// * `reviews` - Reviews in the order they should appear
///
/// # Returns
/// * `Result<String, ReviewError>` - The document; with zero reviews it has no cards
pub fn render(app_id: &str, reviews: &[Review]) -> Result<String, ReviewError> {
    let handlebars = Handlebars::new();
    let context = json!({
        "app_id": app_id,
        "reviews": reviews,
    });

    handlebars
        .render_template(TEMPLATE, &context)
        .map_err(|e| ReviewError::Render {
            format: "html",
            message: e.to_string(),
        })
}
