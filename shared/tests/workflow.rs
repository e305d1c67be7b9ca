use detector_shared::preview::join_previews;
use detector_shared::{
    interpret_response, DetectorState, PredictError, PredictionResult, Predictor, Settlement,
    SubmitRejected,
};
use futures::executor::block_on;
use futures::future::ready;
use std::cell::RefCell;

#[derive(Clone, Debug, PartialEq)]
struct FakeFile {
    name: &'static str,
    readable: bool,
}

fn file(name: &'static str) -> FakeFile {
    FakeFile {
        name,
        readable: true,
    }
}

/// Answers every request with a canned status and body, or a transport failure.
struct CannedPredictor {
    reply: Result<(u16, &'static str), &'static str>,
    sent: RefCell<Vec<Vec<&'static str>>>,
}

impl CannedPredictor {
    fn new(reply: Result<(u16, &'static str), &'static str>) -> Self {
        Self {
            reply,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Predictor for CannedPredictor {
    type File = FakeFile;

    async fn predict(&self, files: &[FakeFile]) -> Result<Vec<PredictionResult>, PredictError> {
        self.sent
            .borrow_mut()
            .push(files.iter().map(|f| f.name).collect());
        match self.reply {
            Ok((status, body)) => interpret_response(status, body),
            Err(message) => Err(PredictError::Transport(message.to_string())),
        }
    }
}

fn load_previews(state: &mut DetectorState<FakeFile>, files: Vec<FakeFile>) {
    let selection = state.select_files(files.clone());
    let reads = files.into_iter().map(|f| {
        ready(if f.readable {
            Ok(format!("data:image/jpeg;base64,{}", f.name))
        } else {
            Err(format!("{} is not readable", f.name))
        })
    });
    let outcome = block_on(join_previews(reads));
    state.apply_previews(selection, outcome);
}

fn submit<P>(state: &mut DetectorState<FakeFile>, predictor: &P) -> Option<Settlement>
where
    P: Predictor<File = FakeFile>,
{
    let batch = state.begin_submit().ok()?;
    assert!(state.is_loading());
    let outcome = block_on(predictor.predict(&batch));
    Some(state.finish_submit(outcome))
}

#[test]
fn test_select_predict_export() {
    let mut state = DetectorState::new();
    load_previews(&mut state, vec![file("a.jpg"), file("b.jpg")]);
    assert_eq!(
        state.previews(),
        ["data:image/jpeg;base64,a.jpg", "data:image/jpeg;base64,b.jpg"]
    );

    let predictor = CannedPredictor::new(Ok((
        200,
        r#"[{"filename":"a.jpg","label":"Real","confidence":0.92},{"filename":"b.jpg","label":"Fake"}]"#,
    )));
    let settlement = submit(&mut state, &predictor);

    assert_eq!(settlement, Some(Settlement::Completed { count: 2 }));
    assert_eq!(*predictor.sent.borrow(), vec![vec!["a.jpg", "b.jpg"]]);
    assert!(!state.is_loading());
    assert_eq!(
        state.export_csv().as_deref(),
        Some("Filename,Label,Confidence\na.jpg,Real,0.92\nb.jpg,Fake,")
    );
}

#[test]
fn test_unreadable_file_keeps_old_previews() {
    let mut state = DetectorState::new();
    load_previews(&mut state, vec![file("a.jpg")]);

    let broken = FakeFile {
        name: "broken.heic",
        readable: false,
    };
    load_previews(&mut state, vec![file("c.jpg"), broken]);

    assert_eq!(state.previews(), ["data:image/jpeg;base64,a.jpg"]);
    assert_eq!(state.files().len(), 2);
    assert!(state.error().is_some());
}

#[test]
fn test_server_error_keeps_results() {
    let mut state = DetectorState::new();
    load_previews(&mut state, vec![file("a.jpg")]);
    let ok = CannedPredictor::new(Ok((
        200,
        r#"[{"filename":"a.jpg","label":"Fake","confidence":0.61}]"#,
    )));
    submit(&mut state, &ok);
    let before = state.results().to_vec();

    let failing = CannedPredictor::new(Ok((500, "model unavailable")));
    let settlement = submit(&mut state, &failing);

    assert!(matches!(settlement, Some(Settlement::Failed { .. })));
    assert_eq!(state.results(), before.as_slice());
    assert!(state.error().is_some());
    assert!(!state.is_loading());
}

#[test]
fn test_transport_failure_clears_loading() {
    let mut state = DetectorState::new();
    load_previews(&mut state, vec![file("a.jpg")]);
    let offline = CannedPredictor::new(Err("connection refused"));

    let settlement = submit(&mut state, &offline);

    assert!(matches!(settlement, Some(Settlement::Failed { .. })));
    assert!(state.results().is_empty());
    assert!(state.can_submit());
}

#[test]
fn test_rejected_submits_never_reach_the_network() {
    let predictor = CannedPredictor::new(Ok((200, "[]")));

    let mut state = DetectorState::new();
    assert_eq!(submit(&mut state, &predictor), None);

    load_previews(&mut state, vec![file("a.jpg")]);
    state.begin_submit().unwrap();
    assert_eq!(state.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(submit(&mut state, &predictor), None);

    assert!(predictor.sent.borrow().is_empty());
}

#[test]
fn test_reselect_after_results_clears_export() {
    let mut state = DetectorState::new();
    load_previews(&mut state, vec![file("a.jpg")]);
    let predictor = CannedPredictor::new(Ok((
        200,
        r#"[{"filename":"a.jpg","label":"Real","confidence":0.99}]"#,
    )));
    submit(&mut state, &predictor);
    assert!(state.export_csv().is_some());

    load_previews(&mut state, vec![file("b.jpg"), file("c.jpg")]);
    assert_eq!(state.export_csv(), None);
    assert_eq!(state.files(), [file("b.jpg"), file("c.jpg")]);
}
