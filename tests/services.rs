//! External service seam tests.

use core::cell::RefCell;

use futures::executor::block_on;
use syndicate21::{EmblemRequest, EmblemService, THEMES, Theme};

/// Records every request; answers `None` unless the colour is a hex code.
#[derive(Default)]
struct RecordingEmblems {
    seen: RefCell<Vec<EmblemRequest>>,
}

impl EmblemService for RecordingEmblems {
    async fn generate(&self, request: &EmblemRequest) -> Option<Vec<u8>> {
        self.seen.borrow_mut().push(*request);
        request
            .color
            .starts_with('#')
            .then(|| request.icon.as_bytes().to_vec())
    }
}

#[test]
fn every_theme_can_request_an_emblem() {
    let service = RecordingEmblems::default();

    for theme in &THEMES {
        let image = block_on(service.generate(&EmblemRequest::for_theme(theme)));
        assert_eq!(image.as_deref(), Some(theme.display.icon.as_bytes()));
    }

    let seen = service.seen.borrow();
    assert_eq!(seen.len(), THEMES.len());
    assert_eq!(seen[0].theme_name, "Crimson Vipers");
}

#[test]
fn missing_emblem_is_not_an_error() {
    let service = RecordingEmblems::default();
    let mut request = EmblemRequest::for_theme(Theme::by_id("shadow").unwrap());
    request.color = "none";

    assert_eq!(block_on(service.generate(&request)), None);
}
