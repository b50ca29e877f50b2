//! Photo cards for one album. Photos can only be deleted; a failed delete
//! raises a browser alert, unlike album mutations which fail silently.

use common::model::photo::Photo;
use gloo_console::error;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PhotosProps {
    pub album_id: u32,
    pub user_id: u32,
    pub on_back: Callback<()>,
}

pub enum Msg {
    Loaded(Vec<Photo>),
    Delete(u32),
    Deleted(u32),
}

pub struct PhotosView {
    photos: Vec<Photo>,
    loaded: bool,
}

impl Component for PhotosView {
    type Message = Msg;
    type Properties = PhotosProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            photos: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(photos) => {
                self.photos = photos;
                true
            }
            Msg::Delete(id) => {
                delete_photo(ctx.link().clone(), id);
                false
            }
            Msg::Deleted(id) => {
                self.photos.retain(|p| p.id != id);
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let album_id = ctx.props().album_id;
            let user_id = ctx.props().user_id;
            let link = ctx.link().clone();
            spawn_local(async move {
                let url = format!("/photos?albumId={album_id}&userId={user_id}");
                match Request::get(&url).send().await {
                    Ok(resp) if resp.status() == 200 => {
                        if let Ok(photos) = resp.json::<Vec<Photo>>().await {
                            link.send_message(Msg::Loaded(photos));
                        }
                    }
                    Ok(resp) => error!(format!("Error fetching photos: status {}", resp.status())),
                    Err(err) => error!(format!("Error fetching photos: {err}")),
                }
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <button onclick={ctx.props().on_back.reform(|_: MouseEvent| ())}>
                    {"Back to albums"}
                </button>
                <h2>{ format!("Photos in Album {}", ctx.props().album_id) }</h2>
                <div class="row">
                    { for self.photos.iter().map(|photo| {
                        let photo_id = photo.id;
                        html! {
                            <div class="card" key={photo.id.to_string()}>
                                <img src={photo.url.clone()} class="card-img-top" alt={photo.title.clone()} />
                                <div class="card-body">
                                    <h5 class="card-title">{ photo.title.clone() }</h5>
                                    <button onclick={link.callback(move |_| Msg::Delete(photo_id))}>
                                        {"Delete"}
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        }
    }
}

fn delete_photo(link: Scope<PhotosView>, id: u32) {
    spawn_local(async move {
        match Request::delete(&format!("/photos/{id}")).send().await {
            Ok(resp) if resp.status() == 200 => link.send_message(Msg::Deleted(id)),
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                alert(&format!("Failed to delete photo: {body}"));
            }
            Err(err) => alert(&format!("Failed to delete photo: {err}")),
        }
    });
}

fn alert(message: &str) {
    error!(message.to_string());
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
