//! Server-rendered HTML pages: the project gallery, the about page and the
//! contact form.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Html;
use axum::Form;
use porto_db::models::{Contact, Portfolio};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::templates::render_page;

/// Shown after a contact form submission is stored.
pub const CONTACT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Request header that overrides the asset prefix used by the contact page.
pub const STATIC_PATH_HEADER: &str = "x-static-path";

const DEFAULT_STATIC_PATH: &str = "/static";

#[derive(Debug, Serialize)]
struct AboutPage {
    name: &'static str,
    bio: &'static str,
    image_url: &'static str,
}

const ABOUT: AboutPage = AboutPage {
    name: "Fauzan Alsya Prasetyo",
    bio: "A software engineer focused on building web applications with clean \
          architecture and Go.",
    image_url: "img/about-us.png",
};

#[derive(Debug, Serialize)]
struct OfficeDetails {
    address: &'static str,
    address_detail: &'static str,
    phone: &'static str,
    phone_desc: &'static str,
    email: &'static str,
    email_desc: &'static str,
}

const OFFICE: OfficeDetails = OfficeDetails {
    address: "California, United States",
    address_detail: "Santa Monica Boulevard",
    phone: "00 (440) 9865 562",
    phone_desc: "Mon to Fri 9am to 6pm",
    email: "support@colorlib.com",
    email_desc: "Send us your query anytime!",
};

/// Fields posted by the contact form. Missing fields read as empty.
///
/// `subject` is echoed back on the page but not stored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize)]
struct PortfolioPage<'a> {
    projects: &'a [Portfolio],
}

#[derive(Serialize)]
struct ContactPage<'a> {
    #[serde(flatten)]
    office: &'a OfficeDetails,
    form: ContactForm,
    form_message: String,
    static_path: String,
}

fn render<T: Serialize>(state: &AppState, name: &str, page: &T) -> AppResult<Html<String>> {
    render_page(state.templates.as_ref(), name, page)
        .map(Html)
        .map_err(|e| AppError::Render(e.to_string()))
}

fn static_path(headers: &HeaderMap) -> String {
    headers
        .get(STATIC_PATH_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_STATIC_PATH)
        .to_string()
}

/// GET /portfolio
pub async fn portfolio(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = state.portfolios.get_all().await.map_err(AppError::Failed)?;
    render(&state, "portfolio.html", &PortfolioPage { projects: &projects })
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, "about.html", &ABOUT)
}

/// GET /contact
pub async fn contact(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Html<String>> {
    let page = ContactPage {
        office: &OFFICE,
        form: ContactForm::default(),
        form_message: String::new(),
        static_path: static_path(&headers),
    };
    render(&state, "contact.html", &page)
}

/// POST /contact
///
/// Runs the same create flow as the JSON API, then re-renders the form. The
/// fields are cleared only when the message was stored.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ContactForm>,
) -> AppResult<Html<String>> {
    let mut contact = Contact {
        id: 0,
        name: form.name.clone(),
        email: form.email.clone(),
        message: form.message.clone(),
    };

    let (form, form_message) = match state.contacts.create(&mut contact).await {
        Ok(()) => (ContactForm::default(), CONTACT_SUCCESS_MESSAGE.to_string()),
        Err(e) => (form, e.to_string()),
    };

    let page = ContactPage {
        office: &OFFICE,
        form,
        form_message,
        static_path: static_path(&headers),
    };
    render(&state, "contact.html", &page)
}
