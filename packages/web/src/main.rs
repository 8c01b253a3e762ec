use dioxus::prelude::*;

use store::{NavTarget, NoteId};
use ui::{AuthProvider, ConfigProvider, NotificationHost, ThemeProvider};
use views::{Archived, NewNote, NoteDetail, Notes, Search, Settings, Shell, TagNotes};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Notes {},
        #[route("/archived")]
        Archived {},
        #[route("/search")]
        Search {},
        #[route("/settings")]
        Settings {},
        #[route("/tags/:tag")]
        TagNotes { tag: String },
        #[route("/note/:note_id")]
        NoteDetail { note_id: String },
        #[route("/new")]
        NewNote {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::AllNotes => Route::Notes {},
            NavTarget::Archived => Route::Archived {},
            NavTarget::Search => Route::Search {},
            NavTarget::Settings => Route::Settings {},
            NavTarget::NewNote => Route::NewNote {},
            NavTarget::Note(NoteId(note_id)) => Route::NoteDetail { note_id },
            NavTarget::Tag(tag) => Route::TagNotes { tag },
        }
    }
}

fn main() {
    #[cfg(feature = "server")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
            )
            .init();

        let result = tokio::runtime::Runtime::new().and_then(|runtime| runtime.block_on(launch_server()));
        if let Err(e) = result {
            tracing::error!("Server failed: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> std::io::Result<()> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    dotenvy::dotenv().ok();

    // Load the config and check the identity before accepting requests.
    let config = api::state::config();
    tracing::info!(
        "Auto-save after {:?}, narrow below {}px",
        config.autosave_delay(),
        config.layout.narrow_breakpoint_px
    );
    match api::identity::current_identity() {
        Ok(user) => tracing::info!("Serving notes for {}", user.display_name()),
        Err(e) => tracing::warn!("No signed-in user: {}", e),
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        NotificationHost {
            ConfigProvider {
                AuthProvider {
                    ThemeProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
