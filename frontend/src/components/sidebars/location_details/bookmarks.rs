//! Bookmark toggles of the location shown in the details sidebar.
//!
//! Current bookmarks are fetched when the component mounts; each toggle sends
//! one create or delete request and only changes the displayed state once the
//! server accepted it.

use std::rc::Rc;

use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::bookmark::BookmarkType;
use common::model::config::FrontendConfig;

use crate::services::bookmark_service::{BookmarkService, BookmarkSet};
use crate::services::error::ServiceError;
use crate::services::liveness::Liveness;
use crate::services::session::Session;
use crate::services::transport::HttpTransport;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationBookmarksProps {
    pub location_id: AttrValue,
    pub config: Rc<FrontendConfig>,
}

pub enum Msg {
    Loaded(BookmarkSet),
    Toggle(BookmarkType),
    Toggled(BookmarkType, Result<BookmarkSet, ServiceError>),
}

pub struct LocationBookmarks {
    pub bookmarks: BookmarkSet,
    pub pending: Option<BookmarkType>,
    session: Session,
    liveness: Liveness,
}

impl LocationBookmarks {
    fn service(&self, ctx: &Context<Self>) -> BookmarkService<HttpTransport> {
        BookmarkService::connect(&ctx.props().config, self.session.clone())
    }

    /// Takes the outcome of a toggle. Returns whether the view changed.
    pub fn finish_toggle(
        &mut self,
        bookmark_type: BookmarkType,
        result: Result<BookmarkSet, ServiceError>,
    ) -> bool {
        if self.pending == Some(bookmark_type) {
            self.pending = None;
        }
        match result {
            Ok(bookmarks) => self.bookmarks = bookmarks,
            Err(error) => {
                gloo_console::error!(format!(
                    "Bookmark {} could not be changed: {}",
                    bookmark_type.as_str(),
                    error
                ));
            }
        }
        true
    }
}

impl Component for LocationBookmarks {
    type Message = Msg;
    type Properties = LocationBookmarksProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            bookmarks: BookmarkSet::default(),
            pending: None,
            session: Session::load(),
            liveness: Liveness::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(bookmarks) => {
                self.bookmarks = bookmarks;
                true
            }
            Msg::Toggle(bookmark_type) => {
                if self.pending.is_some() {
                    return false;
                }
                if !self.session.is_logged_in() {
                    gloo_console::error!("Bookmarks need a logged in user");
                    return false;
                }
                self.pending = Some(bookmark_type);

                let service = self.service(ctx);
                let current = self.bookmarks.clone();
                let location_id = ctx.props().location_id.to_string();
                let link = ctx.link().clone();
                let token = self.liveness.token();
                spawn_local(async move {
                    let result = service.toggle(&location_id, &current, bookmark_type).await;
                    if token.is_alive() {
                        link.send_message(Msg::Toggled(bookmark_type, result));
                    }
                });
                true
            }
            Msg::Toggled(bookmark_type, result) => self.finish_toggle(bookmark_type, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="location-bookmarks">
                <h3>{ "Järjehoidjad" }</h3>
                {
                    for BookmarkType::ALL.iter().map(|&bookmark_type| {
                        let active = self.bookmarks.contains(bookmark_type);
                        let class = classes!("bookmark-toggle", active.then_some("active"));
                        html! {
                            <button type="button" {class}
                                disabled={self.pending.is_some()}
                                onclick={link.callback(move |_| Msg::Toggle(bookmark_type))}>
                                <span class="material-icons">
                                    { if active { "check_box" } else { "check_box_outline_blank" } }
                                </span>
                                { bookmark_type.label() }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        if !self.session.is_logged_in() {
            gloo_console::error!("Bookmarks need a logged in user");
            return;
        }

        let service = self.service(ctx);
        let location_id = ctx.props().location_id.to_string();
        let link = ctx.link().clone();
        let token = self.liveness.token();
        spawn_local(async move {
            match service.fetch(&location_id).await {
                Ok(bookmarks) if token.is_alive() => link.send_message(Msg::Loaded(bookmarks)),
                Ok(_) => {}
                Err(error) => {
                    gloo_console::error!(format!("Bookmarks could not be loaded: {}", error));
                }
            }
        });
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.liveness.revoke();
    }
}
