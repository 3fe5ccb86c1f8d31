use super::{MediaElement, TimeUpdateFn};
use crate::error::{PlayerError, Result};
use dioxus::logger::tracing::warn;
use dioxus::prelude::spawn;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, HtmlAudioElement};

pub struct WebAudio {
    audio: HtmlAudioElement,
}

pub fn locate_media_element(id: &str) -> Option<WebAudio> {
    let document = window()?.document()?;
    let audio = document
        .get_element_by_id(id)?
        .dyn_into::<HtmlAudioElement>()
        .ok()?;
    Some(WebAudio { audio })
}

fn js_error(value: wasm_bindgen::JsValue) -> PlayerError {
    PlayerError::Platform(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl MediaElement for WebAudio {
    type Subscription = Closure<dyn FnMut()>;

    fn play(&self) -> Result<()> {
        let promise = self.audio.play().map_err(js_error)?;
        spawn(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                warn!(error = ?err, "audio element refused to play");
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        self.audio.pause().map_err(js_error)
    }

    fn set_current_time(&self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn subscribe_time_update(&self, mut on_tick: TimeUpdateFn) -> Self::Subscription {
        let audio = self.audio.clone();
        let closure = Closure::wrap(Box::new(move || {
            on_tick(audio.current_time());
        }) as Box<dyn FnMut()>);
        if let Err(err) = self
            .audio
            .add_event_listener_with_callback("timeupdate", closure.as_ref().unchecked_ref())
        {
            warn!(error = ?err, "failed to register timeupdate listener");
        }
        closure
    }

    fn unsubscribe_time_update(&self, subscription: Self::Subscription) {
        if let Err(err) = self.audio.remove_event_listener_with_callback(
            "timeupdate",
            subscription.as_ref().unchecked_ref(),
        ) {
            warn!(error = ?err, "failed to remove timeupdate listener");
        }
    }
}
