use gloo_storage::{LocalStorage, Storage};
use shared::forms::BookFormConfig;
use shared::models::*;
use shared::session::{Session, SessionAction};
use std::rc::Rc;
use yew::prelude::*;

const STORAGE_KEY: &str = "narrativax.settings";

#[derive(Clone, Debug, PartialEq)]
pub struct State {
    pub session: Session,
    pub settings: ClientSettings,
    pub book_form: BookFormConfig,
    pub modal_open: Option<ModalType>,
}

impl Default for State {
    fn default() -> Self {
        let settings =
            LocalStorage::get(STORAGE_KEY).unwrap_or_else(|_| ClientSettings::default());
        Self {
            session: Session::default(),
            settings,
            book_form: BookFormConfig::default(),
            modal_open: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalType {
    Settings,
}

pub enum Action {
    Session(SessionAction),
    UpdateSettings(ClientSettings),
    OpenModal(ModalType),
    CloseModal,
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::Session(action) => {
                next.session.apply(action);
            }
            Action::UpdateSettings(settings) => {
                next.settings = settings.clone();
                if let Err(e) = LocalStorage::set(STORAGE_KEY, settings) {
                    tracing::warn!("Failed to persist settings: {}", e);
                }
            }
            Action::OpenModal(modal_type) => {
                next.modal_open = Some(modal_type);
            }
            Action::CloseModal => {
                next.modal_open = None;
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;
