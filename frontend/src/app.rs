use crate::components::albums::AlbumsView;
use crate::components::photos::PhotosView;
use crate::components::users::UsersView;
use yew::{html, Component, Context, Html};

/// Which screen is on display. Navigation is users -> a user's albums -> an
/// album's photos, with back links one level up at each step.
#[derive(Clone, Copy)]
pub enum View {
    Users,
    Albums { user_id: u32 },
    Photos { album_id: u32, user_id: u32 },
}

pub enum Msg {
    ShowUsers,
    ShowAlbums(u32),
    ShowPhotos { album_id: u32, user_id: u32 },
}

pub struct App {
    view: View,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { view: View::Users }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.view = match msg {
            Msg::ShowUsers => View::Users,
            Msg::ShowAlbums(user_id) => View::Albums { user_id },
            Msg::ShowPhotos { album_id, user_id } => View::Photos { album_id, user_id },
        };
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.view {
            View::Users => html! {
                <UsersView on_select={link.callback(Msg::ShowAlbums)} />
            },
            View::Albums { user_id } => html! {
                <AlbumsView
                    {user_id}
                    on_open={link.callback(|(album_id, user_id)| Msg::ShowPhotos { album_id, user_id })}
                    on_back={link.callback(|_| Msg::ShowUsers)}
                />
            },
            View::Photos { album_id, user_id } => html! {
                <PhotosView
                    {album_id}
                    {user_id}
                    on_back={link.callback(move |_| Msg::ShowAlbums(user_id))}
                />
            },
        }
    }
}
