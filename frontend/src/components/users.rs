use common::model::user::User;
use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UsersProps {
    /// Fired with the user's id when a row is clicked.
    pub on_select: Callback<u32>,
}

pub enum Msg {
    Loaded(Vec<User>),
}

pub struct UsersView {
    users: Vec<User>,
    loaded: bool,
}

impl Component for UsersView {
    type Message = Msg;
    type Properties = UsersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            users: Vec::new(),
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(users) => {
                self.users = users;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/users").send().await {
                    Ok(resp) if resp.status() == 200 => {
                        if let Ok(users) = resp.json::<Vec<User>>().await {
                            link.send_message(Msg::Loaded(users));
                        }
                    }
                    Ok(resp) => error!(format!("Error fetching users: status {}", resp.status())),
                    Err(err) => error!(format!("Error fetching users: {err}")),
                }
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h2>{"Users"}</h2>
                <ul>
                    { for self.users.iter().map(|user| {
                        let id = user.id;
                        let on_select = ctx.props().on_select.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_select.emit(id);
                        });
                        html! {
                            <li key={user.id.to_string()}>
                                <a href="#" {onclick}>
                                    { format!("{} - {}", user.name, user.email) }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        }
    }
}
