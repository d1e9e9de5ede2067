use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

use crate::{
    endpoints,
    html::{LINK_STYLE, base},
};

fn forgot_password_template() -> Markup {
    let content = html! {
        // Template adapted from https://flowbite.com/blocks/marketing/register/
        div
            class="flex flex-col items-center justify-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            a
                href="#"
                class="flex items-center mb-6 text-2xl font-semibold"
            {
                img
                    src="/static/favicon-128x128.png"
                    alt="logo"
                    class="w-8 h-8 mr-2";
                "Cash Flow"
            }
            div
                class="w-full bg-white rounded shadow dark:border md:mt-0 sm:max-w-md xl:p-0 dark:bg-gray-800 dark:border-gray-700"
            {
                div class="p-6 space-y-4 md:space-y-6 sm:p-8"
                {
                    h1 class="text-xl font-bold md:text-2xl"
                    {
                        "Forgot your password?"
                    }

                    p class="text-justify"
                    {
                        "Ask the person running this server to reset it for you. From
                        the directory the server runs in, they can run:"
                    }

                    pre class="p-2 overflow-x-auto rounded bg-gray-100 dark:bg-gray-700 text-sm"
                    {
                        code { "reset_password --db-path <database file> --username <your username>" }
                    }

                    p
                    {
                        "Then "
                        a href=(endpoints::LOG_IN_VIEW) class=(LINK_STYLE) { "log in" }
                        " with your new password."
                    }
                }
            }
        }
    };

    base("Forgot Password", &content)
}

/// Renders a page describing how the user's password can be reset.
pub async fn get_forgot_password_page() -> Response {
    forgot_password_template().into_response()
}

#[cfg(test)]
mod tests {
    use crate::{
        endpoints,
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document, select_text},
    };

    use super::get_forgot_password_page;

    #[tokio::test]
    async fn explains_how_to_reset_password() {
        let response = get_forgot_password_page().await;

        assert_status_ok(&response);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(
            select_text(&html, "code"),
            vec!["reset_password --db-path <database file> --username <your username>"]
        );
        let log_in_link = html
            .select(&scraper::Selector::parse("p a").unwrap())
            .next()
            .expect("No log in link");
        assert_eq!(log_in_link.value().attr("href"), Some(endpoints::LOG_IN_VIEW));
    }
}
