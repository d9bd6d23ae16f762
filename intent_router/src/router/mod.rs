//! Router - dispatches intents to their handlers.
//!
//! Each request runs start to finish against read-only tables:
//! 1. **Parse**: Map the intent name onto the closed [`Intent`] set
//! 2. **Resolve**: Pick the resource table for the request locale
//! 3. **Handle**: Random fact, year fact, help or stop
//! 4. **Format**: Build the speech, reprompt and card
//!
//! Nothing is remembered between requests.

mod lookup;

pub use lookup::*;

use std::sync::Arc;

use fact_store::{LocaleMatch, LocaleTable, SkillResources};
use tracing::{debug, warn};

use crate::error::RouteError;
use crate::intent::{Intent, IntentRequest};
use crate::random::{choose, RandomSource, ThreadRandom};
use crate::response::Response;

/// Maps intent requests to responses.
///
/// The resource tables sit behind an [`Arc`] so several routers (one per
/// worker, each with its own random source) can share them.
pub struct Router<R = ThreadRandom> {
    table: Arc<LocaleTable>,
    rng: R,
}

impl Router<ThreadRandom> {
    /// Create a router over the given tables with the thread RNG.
    pub fn new(table: Arc<LocaleTable>) -> Self {
        Self::with_random(table, ThreadRandom)
    }

    /// Create a router over the built-in English tables.
    pub fn builtin() -> Result<Self, RouteError> {
        Ok(Self::new(Arc::new(LocaleTable::builtin()?)))
    }
}

impl<R: RandomSource> Router<R> {
    /// Create a router with a specific random source.
    pub fn with_random(table: Arc<LocaleTable>, rng: R) -> Self {
        Self { table, rng }
    }

    /// The shared resource tables.
    pub fn table(&self) -> &Arc<LocaleTable> {
        &self.table
    }

    /// Handle one request from the platform layer.
    pub fn handle(&mut self, request: &IntentRequest) -> Result<Response, RouteError> {
        let intent = request.intent().inspect_err(|_| {
            warn!(
                request_id = %request.id,
                intent = %request.intent_name,
                "unrecognized intent"
            );
        })?;

        let Self { table, rng } = self;
        let resources = resolve_locale(table, request);

        debug!(
            request_id = %request.id,
            intent = %intent,
            state = ?intent.state(),
            "dispatching request"
        );

        match intent {
            Intent::Launch | Intent::GetNewFact => random_fact_response(resources, rng),
            Intent::GetNewYearFact => {
                // A missing slot passes through as an empty year, which never matches.
                let year = request.year().unwrap_or_default();
                year_fact_response(resources, rng, year)
            }
            Intent::Help => Ok(help_response(resources)),
            Intent::Cancel | Intent::Stop => Ok(stop_response(resources)),
        }
    }

    /// Answer a random fact from the default locale.
    pub fn random_fact(&mut self) -> Result<Response, RouteError> {
        random_fact_response(self.table.default_resources(), &mut self.rng)
    }

    /// Answer a fact for `year` from the default locale.
    pub fn year_fact(&mut self, year: &str) -> Result<Response, RouteError> {
        year_fact_response(self.table.default_resources(), &mut self.rng, year)
    }

    /// Help text from the default locale.
    pub fn help(&self) -> Response {
        help_response(self.table.default_resources())
    }

    /// Goodbye text from the default locale.
    pub fn stop(&self) -> Response {
        stop_response(self.table.default_resources())
    }
}

fn resolve_locale<'a>(table: &'a LocaleTable, request: &IntentRequest) -> &'a SkillResources {
    let Some(locale) = request.locale.as_deref() else {
        return table.default_resources();
    };

    let (resources, matched) = table.resolve(locale);
    if matched == LocaleMatch::Default {
        warn!(
            request_id = %request.id,
            locale,
            fallback = table.default_locale(),
            "no resources for locale, using default"
        );
    }
    resources
}

fn pick_phrase<'a, R: RandomSource>(resources: &'a SkillResources, rng: &mut R) -> &'a str {
    // Phrase sets are never empty once built.
    choose(rng, resources.phrases.phrases())
        .map(String::as_str)
        .unwrap_or_default()
}

/// Random fact, session kept open.
fn random_fact_response<R: RandomSource>(
    resources: &SkillResources,
    rng: &mut R,
) -> Result<Response, RouteError> {
    let fact = random_fact(&resources.facts, rng)?;
    let phrase = pick_phrase(resources, rng);
    let messages = &resources.messages;

    Ok(Response::ask_with_card(
        format!("{}{}", phrase, fact.text()),
        messages.reprompt.as_str(),
        messages.skill_name.as_str(),
        fact.text(),
    ))
}

/// Fact for a requested year. The card is titled with the year on hit and miss.
fn year_fact_response<R: RandomSource>(
    resources: &SkillResources,
    rng: &mut R,
    year: &str,
) -> Result<Response, RouteError> {
    let lookup = lookup_year(&resources.facts, year, rng)?;
    let phrase = pick_phrase(resources, rng);
    let messages = &resources.messages;

    let speech = match lookup {
        YearLookup::Hit(fact) => {
            debug!(year, "year lookup hit");
            format!("{}{}", phrase, fact.text())
        }
        YearLookup::Miss(fact) => {
            debug!(year, fallback = fact.text(), "year lookup miss");
            format!("{}{}{}", phrase, messages.year_not_found, fact.text())
        }
    };

    Ok(Response::ask_with_card(
        speech,
        messages.reprompt_year.as_str(),
        year,
        lookup.fact().text(),
    ))
}

/// Help text as both speech and reprompt.
fn help_response(resources: &SkillResources) -> Response {
    let help = resources.messages.help.as_str();
    Response::ask(help, help)
}

fn stop_response(resources: &SkillResources) -> Response {
    Response::tell(resources.messages.stop.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fact_store::{FactCollection, PhraseSet, SkillMessages};
    use std::collections::HashSet;

    const NOT_FOUND: &str = "Fact for this year is not available, here is another fact. ";

    /// Replays a fixed list of draws, cycling when it runs out.
    struct ScriptedRandom {
        picks: Vec<usize>,
        next: usize,
    }

    impl ScriptedRandom {
        fn new(picks: Vec<usize>) -> Self {
            Self { picks, next: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn pick_index(&mut self, len: usize) -> usize {
            let pick = self.picks[self.next % self.picks.len()];
            self.next += 1;
            pick % len
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    }

    fn messages() -> SkillMessages {
        SkillMessages {
            skill_name: "My History Facts".into(),
            help: "You can say tell me a fact, or, you can say exit...".into(),
            help_reprompt: "What can I help you with?".into(),
            stop: "Goodbye!".into(),
            reprompt: "Please say tell me a fact to get a random fact".into(),
            reprompt_year: "Please say tell me a fact followed by the year".into(),
            year_not_found: NOT_FOUND.into(),
        }
    }

    fn scenario_table() -> Arc<LocaleTable> {
        let resources = SkillResources::new(
            FactCollection::from_texts(["In 1997, X happened.", "In 2005, Y happened."]).unwrap(),
            PhraseSet::new(vec!["Here's your fact: ".into(), "Fact is: ".into()]).unwrap(),
            messages(),
        )
        .unwrap();
        Arc::new(LocaleTable::new("en", resources))
    }

    fn scripted_router(picks: Vec<usize>) -> Router<ScriptedRandom> {
        Router::with_random(scenario_table(), ScriptedRandom::new(picks))
    }

    #[test]
    fn test_random_fact_formatting() {
        // Draw order: fact, then phrase.
        let mut router = scripted_router(vec![1, 0]);
        let response = router.handle(&IntentRequest::new("GetNewFact")).unwrap();

        assert_eq!(response.speech_text, "Here's your fact: In 2005, Y happened.");
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("Please say tell me a fact to get a random fact")
        );
        assert_eq!(response.card_title(), Some("My History Facts"));
        assert_eq!(response.card_body(), Some("In 2005, Y happened."));
        assert!(response.session_open);
    }

    #[test]
    fn test_launch_behaves_like_get_new_fact() {
        let mut router = scripted_router(vec![0, 1]);
        let launch = router.handle(&IntentRequest::new("LaunchRequest")).unwrap();
        let mut router = scripted_router(vec![0, 1]);
        let fact = router.handle(&IntentRequest::new("GetNewFactIntent")).unwrap();

        assert_eq!(launch, fact);
        assert_eq!(launch.speech_text, "Fact is: In 1997, X happened.");
    }

    #[test]
    fn test_year_fact_hit() {
        init_tracing();
        let mut router = scripted_router(vec![1]);
        let response = router.handle(&IntentRequest::year_fact("1997")).unwrap();

        assert_eq!(response.speech_text, "Fact is: In 1997, X happened.");
        assert!(!response.speech_text.contains(NOT_FOUND));
        assert_eq!(response.card_title(), Some("1997"));
        assert_eq!(response.card_body(), Some("In 1997, X happened."));
        assert_eq!(
            response.reprompt_text.as_deref(),
            Some("Please say tell me a fact followed by the year")
        );
        assert!(response.session_open);
    }

    #[test]
    fn test_year_fact_miss() {
        init_tracing();
        // Draw order on a miss: fallback fact, then phrase.
        let mut router = scripted_router(vec![1, 0]);
        let response = router.handle(&IntentRequest::year_fact("1999")).unwrap();

        assert_eq!(
            response.speech_text,
            format!("Here's your fact: {}In 2005, Y happened.", NOT_FOUND)
        );
        assert_eq!(response.card_title(), Some("1999"));
        assert_eq!(response.card_body(), Some("In 2005, Y happened."));
        assert!(response.session_open);
    }

    #[test]
    fn test_year_fact_miss_with_thread_random() {
        let mut router = Router::new(scenario_table());
        let facts = ["In 1997, X happened.", "In 2005, Y happened."];

        for _ in 0..50 {
            let response = router.handle(&IntentRequest::year_fact("1999")).unwrap();
            let (_, rest) = response.speech_text.split_once(NOT_FOUND).unwrap();
            assert!(facts.contains(&rest));
            assert_eq!(response.card_title(), Some("1999"));
        }
    }

    #[test]
    fn test_year_fact_fallback_mentioning_year_is_still_a_miss() {
        let resources = SkillResources::new(
            FactCollection::from_texts(["In 2005, the 1999 plan was finished."]).unwrap(),
            PhraseSet::new(vec!["Fact is: ".into()]).unwrap(),
            messages(),
        )
        .unwrap();
        let mut router = Router::new(Arc::new(LocaleTable::new("en", resources)));

        let response = router.year_fact("1999").unwrap();
        assert_eq!(
            response.speech_text,
            format!("Fact is: {}In 2005, the 1999 plan was finished.", NOT_FOUND)
        );
    }

    #[test]
    fn test_year_fact_malformed_slot_passes_through() {
        let mut router = scripted_router(vec![0]);

        let response = router.handle(&IntentRequest::year_fact("next year")).unwrap();
        assert!(response.speech_text.contains(NOT_FOUND));
        assert_eq!(response.card_title(), Some("next year"));

        let response = router.handle(&IntentRequest::new("GetNewYearFactIntent")).unwrap();
        assert!(response.speech_text.contains(NOT_FOUND));
        assert_eq!(response.card_title(), Some(""));
    }

    #[test]
    fn test_every_tagged_year_is_a_hit() {
        let mut router = Router::builtin().unwrap();
        let table = Arc::clone(router.table());
        let facts = &table.default_resources().facts;

        for fact in facts.iter() {
            let year = fact.year_tag().unwrap();
            let expected = facts.find_by_year(year).unwrap();
            let response = router.year_fact(year).unwrap();

            assert!(response.speech_text.ends_with(expected.text()));
            assert!(!response.speech_text.contains("not available"));
            assert_eq!(response.card_title(), Some(year));
        }
    }

    #[test]
    fn test_random_fact_varies() {
        let mut router = Router::builtin().unwrap();
        let table = Arc::clone(router.table());
        let facts = &table.default_resources().facts;

        let mut seen = HashSet::new();
        for _ in 0..100 {
            let response = router.random_fact().unwrap();
            let body = response.card_body().unwrap().to_string();
            assert!(facts.iter().any(|f| f.text() == body));
            assert!(response.speech_text.ends_with(&body));
            seen.insert(body);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_help_keeps_session_open() {
        let mut router = scripted_router(vec![0]);
        let response = router.handle(&IntentRequest::new("AMAZON.HelpIntent")).unwrap();

        assert!(response.session_open);
        assert_eq!(response.speech_text, messages().help);
        assert_eq!(response.reprompt_text.as_deref(), Some(messages().help.as_str()));
        assert!(response.card.is_none());
        assert_eq!(router.help(), response);
    }

    #[test]
    fn test_stop_and_cancel_end_session() {
        let mut router = scripted_router(vec![0]);
        let stop = router.handle(&IntentRequest::new("AMAZON.StopIntent")).unwrap();
        let cancel = router.handle(&IntentRequest::new("Cancel")).unwrap();

        assert_eq!(stop, cancel);
        assert!(!stop.session_open);
        assert_eq!(stop.speech_text, "Goodbye!");
        assert!(stop.reprompt_text.is_none());
        assert_eq!(router.stop(), stop);
    }

    #[test]
    fn test_unrecognized_intent_is_surfaced() {
        init_tracing();
        let mut router = scripted_router(vec![0]);
        let result = router.handle(&IntentRequest::new("OrderPizzaIntent"));
        assert!(matches!(result, Err(RouteError::UnrecognizedIntent(name)) if name == "OrderPizzaIntent"));
    }

    #[test]
    fn test_locale_resolution() {
        init_tracing();
        let german = SkillResources::new(
            FactCollection::from_texts(["Die Mauer fiel 1989."]).unwrap(),
            PhraseSet::new(vec!["Dein Fakt: ".into()]).unwrap(),
            SkillMessages {
                stop: "Tschüss!".into(),
                ..messages()
            },
        )
        .unwrap();
        let table = LocaleTable::builtin().unwrap().with_locale("de", german);
        let mut router = Router::new(Arc::new(table));

        let response = router
            .handle(&IntentRequest::year_fact("1989").with_locale("de-DE"))
            .unwrap();
        assert_eq!(response.speech_text, "Dein Fakt: Die Mauer fiel 1989.");

        let response = router
            .handle(&IntentRequest::new("Stop").with_locale("fr-FR"))
            .unwrap();
        assert_eq!(response.speech_text, "Goodbye!");
    }

    #[test]
    fn test_requests_do_not_share_state() {
        let mut router = scripted_router(vec![0, 0]);
        let first = router.handle(&IntentRequest::year_fact("2005")).unwrap();
        router.handle(&IntentRequest::new("Stop")).unwrap();
        let second = router.handle(&IntentRequest::year_fact("2005")).unwrap();

        assert_eq!(first, second);
        assert!(second.session_open);
    }
}
