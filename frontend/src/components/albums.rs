//! Album browser for one user: paginated cards plus create, rename and
//! delete. After every successful mutation the list is refetched so the
//! derived photo counts stay current. Mutation failures are only logged to
//! the console; the cards simply keep their previous state.

use crate::components::pagination::Pagination;
use common::model::album::AlbumSummary;
use common::pagination::paginate;
use common::requests::{CreateAlbumRequest, UpdateAlbumRequest};
use gloo_console::error;
use gloo_net::http::Request;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

const ALBUMS_PER_PAGE: usize = 10;

#[derive(Properties, PartialEq)]
pub struct AlbumsProps {
    pub user_id: u32,
    /// Fired with `(album_id, user_id)` when an album card is opened.
    pub on_open: Callback<(u32, u32)>,
    pub on_back: Callback<()>,
}

pub enum Msg {
    Loaded(Vec<AlbumSummary>),
    SetPage(usize),
    SetNewTitle(String),
    Create,
    StartEdit(u32, String),
    SetEditTitle(String),
    SubmitEdit,
    CancelEdit,
    Delete(u32),
    Refresh,
}

pub struct AlbumsView {
    albums: Vec<AlbumSummary>,
    page: usize,
    new_title: String,
    editing: Option<u32>,
    edit_title: String,
    loaded: bool,
}

impl Component for AlbumsView {
    type Message = Msg;
    type Properties = AlbumsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            albums: Vec::new(),
            page: 1,
            new_title: String::new(),
            editing: None,
            edit_title: String::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(albums) => {
                self.albums = albums;
                // A deletion can leave the current page past the end.
                if self.page > 1 && paginate(&self.albums, ALBUMS_PER_PAGE, self.page).is_empty() {
                    self.page = 1;
                }
                true
            }
            Msg::SetPage(page) => {
                self.page = page;
                true
            }
            Msg::SetNewTitle(title) => {
                self.new_title = title;
                true
            }
            Msg::Create => {
                let title = self.new_title.trim().to_string();
                if title.is_empty() {
                    return false;
                }
                create_album(ctx.link().clone(), ctx.props().user_id, title);
                self.new_title.clear();
                true
            }
            Msg::StartEdit(id, title) => {
                self.editing = Some(id);
                self.edit_title = title;
                true
            }
            Msg::SetEditTitle(title) => {
                self.edit_title = title;
                true
            }
            Msg::SubmitEdit => {
                if let Some(id) = self.editing.take() {
                    rename_album(ctx.link().clone(), id, self.edit_title.clone());
                }
                true
            }
            Msg::CancelEdit => {
                self.editing = None;
                true
            }
            Msg::Delete(id) => {
                delete_album(ctx.link().clone(), id);
                false
            }
            Msg::Refresh => {
                fetch_albums(ctx.link().clone(), ctx.props().user_id);
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            fetch_albums(ctx.link().clone(), ctx.props().user_id);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let page_albums = paginate(&self.albums, ALBUMS_PER_PAGE, self.page);

        html! {
            <div>
                <button onclick={ctx.props().on_back.reform(|_: MouseEvent| ())}>
                    {"Back to users"}
                </button>
                <h2>{"Albums"}</h2>
                <div class="add-album">
                    <input
                        placeholder="New album title"
                        value={self.new_title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetNewTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button onclick={link.callback(|_| Msg::Create)}>{"Add album"}</button>
                </div>
                <div class="row">
                    { for page_albums.iter().map(|album| self.album_card(ctx, album)) }
                </div>
                <Pagination
                    total={self.albums.len()}
                    page_size={ALBUMS_PER_PAGE}
                    current={self.page}
                    on_select={link.callback(Msg::SetPage)}
                />
            </div>
        }
    }
}

impl AlbumsView {
    fn album_card(&self, ctx: &Context<Self>, album: &AlbumSummary) -> Html {
        let link = ctx.link();
        let album_id = album.id;
        let user_id = ctx.props().user_id;
        let on_open = ctx.props().on_open.clone();
        let open = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open.emit((album_id, user_id));
        });

        let body = if self.editing == Some(album.id) {
            html! {
                <div class="card-body">
                    <input
                        value={self.edit_title.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEditTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                    <button onclick={link.callback(|_| Msg::SubmitEdit)}>{"Save"}</button>
                    <button onclick={link.callback(|_| Msg::CancelEdit)}>{"Cancel"}</button>
                </div>
            }
        } else {
            let title = album.title.clone();
            html! {
                <div class="card-body">
                    <h5 class="card-title">
                        <a href="#" onclick={open}>{ album.title.clone() }</a>
                    </h5>
                    <p class="card-text">{ format!("Total Photos: {}", album.photo_count) }</p>
                    <button onclick={link.callback(move |_| Msg::StartEdit(album_id, title.clone()))}>
                        {"Edit"}
                    </button>
                    <button onclick={link.callback(move |_| Msg::Delete(album_id))}>
                        {"Delete"}
                    </button>
                </div>
            }
        };

        html! {
            <div class="card" key={album.id.to_string()}>{ body }</div>
        }
    }
}

fn fetch_albums(link: Scope<AlbumsView>, user_id: u32) {
    spawn_local(async move {
        match Request::get(&format!("/albums?userId={user_id}")).send().await {
            Ok(resp) if resp.status() == 200 => {
                if let Ok(albums) = resp.json::<Vec<AlbumSummary>>().await {
                    link.send_message(Msg::Loaded(albums));
                }
            }
            Ok(resp) => error!(format!("Error fetching albums: status {}", resp.status())),
            Err(err) => error!(format!("Error fetching albums: {err}")),
        }
    });
}

fn create_album(link: Scope<AlbumsView>, user_id: u32, title: String) {
    spawn_local(async move {
        // The component only holds this user's albums, but ids are unique
        // across the whole collection, so the next free id has to come from
        // the unfiltered listing.
        let all_albums = match Request::get("/albums").send().await {
            Ok(resp) if resp.status() == 200 => match resp.json::<Vec<AlbumSummary>>().await {
                Ok(albums) => albums,
                Err(err) => {
                    error!(format!("Error creating album: {err}"));
                    return;
                }
            },
            Ok(resp) => {
                error!(format!("Error creating album: status {}", resp.status()));
                return;
            }
            Err(err) => {
                error!(format!("Error creating album: {err}"));
                return;
            }
        };

        let request = CreateAlbumRequest {
            user_id,
            id: next_album_id(&all_albums),
            title,
        };
        match Request::post("/albums").json(&request).unwrap().send().await {
            Ok(resp) if resp.status() == 201 => link.send_message(Msg::Refresh),
            Ok(resp) => error!(format!("Error creating album: status {}", resp.status())),
            Err(err) => error!(format!("Error creating album: {err}")),
        }
    });
}

/// Picks the next caller-assigned album id: one past the highest id in the
/// full collection. Deriving it from a per-user subset would collide with
/// another user's albums and get the create rejected as a duplicate.
fn next_album_id(albums: &[AlbumSummary]) -> u32 {
    albums.iter().map(|a| a.id).max().unwrap_or(0) + 1
}

fn rename_album(link: Scope<AlbumsView>, id: u32, title: String) {
    spawn_local(async move {
        let request = UpdateAlbumRequest { title };
        match Request::put(&format!("/albums/{id}"))
            .json(&request)
            .unwrap()
            .send()
            .await
        {
            Ok(resp) if resp.status() == 200 => link.send_message(Msg::Refresh),
            Ok(resp) => error!(format!("Error updating album: status {}", resp.status())),
            Err(err) => error!(format!("Error updating album: {err}")),
        }
    });
}

fn delete_album(link: Scope<AlbumsView>, id: u32) {
    spawn_local(async move {
        match Request::delete(&format!("/albums/{id}")).send().await {
            Ok(resp) if resp.status() == 200 => link.send_message(Msg::Refresh),
            Ok(resp) => error!(format!("Error deleting album: status {}", resp.status())),
            Err(err) => error!(format!("Error deleting album: {err}")),
        }
    });
}
