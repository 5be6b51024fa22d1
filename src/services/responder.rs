//! Response assembly.
//!
//! [`Responder::process`] evaluates mutually exclusive branches in a fixed
//! order; the first applicable one produces the response:
//!
//! | # | Branch | Confidence | Source |
//! |---|--------|------------|--------|
//! | 1 | empty input | none | - |
//! | 2 | specific pattern | high | `specific_answers` |
//! | 3 | greeting / thanks / farewell / help | high | - |
//! | 4 | knowledge-base match | high | `qa_database` |
//! | 5 | verse corpus hit | medium | `search_model` |
//! | 6 | not found (+ fact) | none | `none` |

use crate::config::QaConfig;
use crate::corpus::{self, FileCorpus, VerseSearcher};
use crate::matching::patterns::{
    HELP_TEXT, MAX_RELATED, NO_QUESTION_ANSWER, PROPHETS_FALLBACK_SUGGESTION, THANKS_SUGGESTIONS,
};
use crate::matching::{KnowledgeMatcher, classify_intent, find_specific_answer, related};
use crate::models::{
    Category, Confidence, Intent, KnowledgeBase, MatchResult, Pool, QuestionRecord, Response,
    Source, VerseSearchResult,
};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::instrument;

/// Builds responses for user utterances.
#[derive(Clone)]
pub struct Responder {
    matcher: KnowledgeMatcher,
    max_related: usize,
    max_additional_verses: Option<usize>,
    corpus: Option<Arc<dyn VerseSearcher>>,
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("matcher", &self.matcher)
            .field("max_related", &self.max_related)
            .field("max_additional_verses", &self.max_additional_verses)
            .field("corpus", &self.corpus.is_some())
            .finish()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            matcher: KnowledgeMatcher::default(),
            max_related: MAX_RELATED,
            max_additional_verses: None,
            corpus: None,
        }
    }
}

impl Responder {
    /// Creates a responder with default thresholds and no corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a responder from configuration.
    ///
    /// A configured corpus file is wrapped in a lazily loading [`FileCorpus`].
    #[must_use]
    pub fn from_config(config: &QaConfig) -> Self {
        let mut responder = Self {
            matcher: KnowledgeMatcher::new(config.matching),
            max_related: config.max_related.min(MAX_RELATED),
            max_additional_verses: config.max_additional_verses,
            corpus: None,
        };
        if let Some(path) = &config.corpus_file {
            responder = responder.with_corpus(Arc::new(FileCorpus::new(path)));
        }
        responder
    }

    /// Sets the secondary verse searcher.
    #[must_use]
    pub fn with_corpus(mut self, corpus: Arc<dyn VerseSearcher>) -> Self {
        self.corpus = Some(corpus);
        self
    }

    /// Sets the knowledge-base matcher.
    #[must_use]
    pub const fn with_matcher(mut self, matcher: KnowledgeMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Sets the number of suggested follow-up questions, at most three.
    #[must_use]
    pub const fn with_max_related(mut self, max_related: usize) -> Self {
        self.max_related = if max_related > MAX_RELATED { MAX_RELATED } else { max_related };
        self
    }

    /// Caps the extra verses appended to corpus answers.
    #[must_use]
    pub const fn with_max_additional_verses(mut self, max: usize) -> Self {
        self.max_additional_verses = Some(max);
        self
    }

    /// Answers an utterance, converting any internal panic into a degraded
    /// not-found response.
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, kb: &KnowledgeBase, rng: &mut R) -> Response {
        catch_unwind(AssertUnwindSafe(|| self.process(input, kb, rng))).unwrap_or_else(|panic| {
            let message = panic
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            tracing::error!(panic_message = %message, "Responder panicked; returning degraded response");
            metrics::counter!("qa_requests_total", "branch" => "degraded").increment(1);
            Response::new(Pool::NotFound.default_entry(), Confidence::None, Intent::Unknown)
                .with_source(Source::None)
        })
    }

    /// Answers an utterance.
    #[instrument(skip(self, input, kb, rng), fields(input_length = input.len()))]
    pub fn process<R: Rng + ?Sized>(&self, input: &str, kb: &KnowledgeBase, rng: &mut R) -> Response {
        let input = input.trim();

        let (branch, response) = self.dispatch(input, kb, rng);
        metrics::counter!("qa_requests_total", "branch" => branch).increment(1);
        tracing::debug!(
            branch,
            confidence = response.confidence.as_str(),
            intent = response.intent.as_str(),
            "Response assembled"
        );
        response
    }

    fn dispatch<R: Rng + ?Sized>(
        &self,
        input: &str,
        kb: &KnowledgeBase,
        rng: &mut R,
    ) -> (&'static str, Response) {
        if input.is_empty() {
            return (
                "empty",
                Response::new(NO_QUESTION_ANSWER, Confidence::None, Intent::Question),
            );
        }

        if let Some(specific) = find_specific_answer(input) {
            let response = Response::new(specific.answer, Confidence::High, Intent::Question)
                .with_suggestions(self.prophet_suggestions(kb))
                .with_source(Source::SpecificAnswers);
            return ("specific", response);
        }

        let intent = classify_intent(input);
        if let Some(response) = self.conversational(intent, kb, rng) {
            return (intent.as_str(), response);
        }

        if let Some(hit) = self.matcher.find(input, kb) {
            let response = Response::new(hit.record.answer.clone(), Confidence::High, intent)
                .with_suggestions(self.related_questions(Some(hit.record), kb))
                .with_source(Source::QaDatabase);
            return ("knowledge_base", response);
        }

        if let Some(result) = self.search_corpus(input) {
            if let Some(answer) = corpus::format_answer(&result, self.max_additional_verses) {
                let response = Response::new(answer, Confidence::Medium, intent)
                    .with_suggestions(corpus::suggestions(&result, input))
                    .with_source(Source::SearchModel);
                return ("corpus", response);
            }
        }

        let response = Response::new(pick(kb, Pool::NotFound, rng), Confidence::None, Intent::Unknown)
            .with_fact(pick(kb, Pool::Facts, rng))
            .with_suggestions(self.related_questions(None, kb))
            .with_source(Source::None);
        ("not_found", response)
    }

    /// Replies for conversational intents; `None` for questions.
    fn conversational<R: Rng + ?Sized>(
        &self,
        intent: Intent,
        kb: &KnowledgeBase,
        rng: &mut R,
    ) -> Option<Response> {
        let response = match intent {
            Intent::Greeting => Response::new(pick(kb, Pool::Greetings, rng), Confidence::High, intent)
                .with_suggestions(self.related_questions(None, kb)),
            Intent::Thanks => Response::new(pick(kb, Pool::ThankYou, rng), Confidence::High, intent)
                .with_suggestions(THANKS_SUGGESTIONS.iter().map(ToString::to_string).collect()),
            Intent::Farewell => {
                Response::new(pick(kb, Pool::Farewell, rng), Confidence::High, intent).with_farewell()
            },
            Intent::Help => Response::new(HELP_TEXT, Confidence::High, intent)
                .with_suggestions(self.related_questions(None, kb)),
            Intent::History | Intent::Question | Intent::Unknown => return None,
        };
        Some(response)
    }

    /// Classifies the outcome of the matching branches without building text.
    ///
    /// Conversational intents are not considered.
    #[must_use]
    pub fn match_query<'a>(&self, input: &str, kb: &'a KnowledgeBase) -> MatchResult<'a> {
        let input = input.trim();
        if input.is_empty() {
            return MatchResult::none();
        }
        if find_specific_answer(input).is_some() {
            return MatchResult::specific();
        }
        if let Some(hit) = self.matcher.find(input, kb) {
            return MatchResult::record(hit.record);
        }
        if self
            .search_corpus(input)
            .is_some_and(|result| result.primary_match.is_some())
        {
            return MatchResult::corpus();
        }
        MatchResult::none()
    }

    /// Runs the corpus search; any unavailability or failure is "no result".
    fn search_corpus(&self, input: &str) -> Option<VerseSearchResult> {
        let Some(corpus) = &self.corpus else {
            return None;
        };
        if !corpus.is_available() {
            metrics::counter!("corpus_search_total", "outcome" => "unavailable").increment(1);
            return None;
        }

        match corpus.search(input) {
            Ok(result) => {
                let outcome = if result.primary_match.is_some() { "hit" } else { "miss" };
                metrics::counter!("corpus_search_total", "outcome" => outcome).increment(1);
                Some(result)
            },
            Err(e) => {
                metrics::counter!("corpus_search_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %e, "Corpus search failed");
                None
            },
        }
    }

    fn related_questions(
        &self,
        matched: Option<&QuestionRecord>,
        kb: &KnowledgeBase,
    ) -> Vec<String> {
        related(matched, kb, self.max_related)
            .into_iter()
            .map(|record| record.question.clone())
            .collect()
    }

    fn prophet_suggestions(&self, kb: &KnowledgeBase) -> Vec<String> {
        let prophets: Vec<String> = kb
            .in_category(Category::Prophets)
            .take(self.max_related)
            .map(|record| record.question.clone())
            .collect();
        if prophets.is_empty() {
            vec![PROPHETS_FALLBACK_SUGGESTION.to_string()]
        } else {
            prophets
        }
    }
}

/// Picks a random entry from a pool (pools are never empty).
fn pick<R: Rng + ?Sized>(kb: &KnowledgeBase, pool: Pool, rng: &mut R) -> String {
    kb.pool(pool)
        .choose(rng)
        .map_or_else(|| pool.default_entry().to_string(), |s| (*s).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{InMemoryCorpus, reference};
    use crate::models::{KnowledgeData, VerseRecord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new(KnowledgeData {
            questions: vec![
                QuestionRecord::new("quran_surahs", "قرآن میں کتنی سورتیں ہیں", "قرآن میں 114 سورتیں ہیں۔")
                    .with_category(Category::Structure)
                    .with_keywords(["سورتیں"]),
                QuestionRecord::new("quran_paras", "قرآن کتنے پاروں پر مشتمل ہے", "30 پارے")
                    .with_category(Category::Structure),
                QuestionRecord::new("prophets_count", "قرآن میں کتنے انبیاء کا ذکر ہے", "25")
                    .with_category(Category::Prophets),
            ],
            greetings: vec!["وعلیکم السلام! آپ کیسے ہیں؟".to_string()],
            facts: vec!["قرآن میں 30 پارے ہیں۔".to_string()],
            ..KnowledgeData::default()
        })
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_empty_input() {
        let response = Responder::new().process("   ", &kb(), &mut rng());
        assert_eq!(response.answer, NO_QUESTION_ANSWER);
        assert_eq!(response.confidence, Confidence::None);
        assert!(response.source.is_none());
    }

    #[test]
    fn test_specific_answer_with_prophet_suggestions() {
        let response = Responder::new().process("کس نبی کا سب سے زیادہ ذکر ہے", &kb(), &mut rng());
        assert_eq!(response.source, Some(Source::SpecificAnswers));
        assert_eq!(response.confidence, Confidence::High);
        assert_eq!(response.suggestions(), ["قرآن میں کتنے انبیاء کا ذکر ہے"]);

        let empty = KnowledgeBase::default();
        let response = Responder::new().process("most mentioned prophet", &empty, &mut rng());
        assert_eq!(response.suggestions(), [PROPHETS_FALLBACK_SUGGESTION]);
    }

    #[test]
    fn test_conversational_branches() {
        let kb = kb();
        let responder = Responder::new();

        let greeting = responder.process("السلام علیکم", &kb, &mut rng());
        assert_eq!(greeting.intent, Intent::Greeting);
        assert_eq!(greeting.answer, "وعلیکم السلام! آپ کیسے ہیں؟");
        assert_eq!(
            greeting.suggestions(),
            ["قرآن کتنے پاروں پر مشتمل ہے", "قرآن میں کتنی سورتیں ہیں"]
        );

        let bare = responder.process("سلام", &kb, &mut rng());
        assert_eq!(bare.intent, Intent::Greeting);

        let thanks = responder.process("شکریہ", &kb, &mut rng());
        assert_eq!(thanks.intent, Intent::Thanks);
        assert_eq!(thanks.answer, "آپ کا شکریہ!");
        assert_eq!(thanks.suggestions(), ["مزید سوالات", "اللہ حافظ"]);

        let farewell = responder.process("اللہ حافظ", &kb, &mut rng());
        assert_eq!(farewell.farewell, Some(true));

        let help = responder.process("help", &kb, &mut rng());
        assert_eq!(help.answer, HELP_TEXT);
    }

    #[test]
    fn test_knowledge_base_branch() {
        let response = Responder::new().process("قرآن میں کتنی سورتیں ہیں؟", &kb(), &mut rng());
        assert_eq!(response.answer, "قرآن میں 114 سورتیں ہیں۔");
        assert_eq!(response.source, Some(Source::QaDatabase));
        assert_eq!(response.intent, Intent::Question);
        assert_eq!(
            response.suggestions(),
            ["قرآن میں کتنی سورتیں ہیں", "قرآن کتنے پاروں پر مشتمل ہے"]
        );
    }

    #[test]
    fn test_corpus_branch() {
        let corpus = InMemoryCorpus::new(vec![VerseRecord {
            surah: 55,
            ayah: 1,
            verse: "رحمن".to_string(),
            reference: reference(55, 1),
        }]);
        let responder = Responder::new().with_corpus(Arc::new(corpus));
        let response = responder.process("رحمن", &kb(), &mut rng());
        assert_eq!(response.confidence, Confidence::Medium);
        assert_eq!(response.source, Some(Source::SearchModel));
        assert_eq!(response.answer, "رحمن\n\n📖 الرحمن ، آیت 1");
        assert_eq!(response.suggestions().last().map(String::as_str), Some("رحمن کے بارے میں مزید"));
    }

    #[test]
    fn test_not_found_branch() {
        let response = Responder::new().process("موسم کیسا ہے", &kb(), &mut rng());
        assert_eq!(response.confidence, Confidence::None);
        assert_eq!(response.intent, Intent::Unknown);
        assert_eq!(response.source, Some(Source::None));
        assert_eq!(response.fact.as_deref(), Some("قرآن میں 30 پارے ہیں۔"));
        assert_eq!(response.answer, Pool::NotFound.default_entry());
        assert_eq!(
            response.suggestions(),
            ["قرآن کتنے پاروں پر مشتمل ہے", "قرآن میں کتنی سورتیں ہیں"]
        );
    }

    #[test]
    fn test_not_found_ignores_category_words_in_input() {
        // "سورت" infers the structure category but one boost stays under the long-query threshold
        let response = Responder::new().process("سورت اور آج کا موسم", &kb(), &mut rng());
        assert_eq!(response.source, Some(Source::None));
        assert_eq!(
            response.suggestions(),
            ["قرآن کتنے پاروں پر مشتمل ہے", "قرآن میں کتنی سورتیں ہیں"]
        );
    }

    #[test]
    fn test_max_related_is_capped() {
        let responder = Responder::new().with_max_related(10);
        assert_eq!(responder.max_related, MAX_RELATED);

        let config = QaConfig {
            max_related: 7,
            ..QaConfig::default()
        };
        assert_eq!(Responder::from_config(&config).max_related, MAX_RELATED);
    }

    #[test]
    fn test_failing_corpus_falls_through() {
        let responder = Responder::new().with_corpus(Arc::new(crate::corpus::DisabledCorpus));
        let response = responder.process("موسم کیسا ہے", &kb(), &mut rng());
        assert_eq!(response.confidence, Confidence::None);
    }

    #[test]
    fn test_match_query() {
        let kb = kb();
        let responder = Responder::new();
        assert_eq!(responder.match_query("", &kb), MatchResult::none());
        assert_eq!(
            responder.match_query("most mentioned prophet", &kb).source,
            Source::SpecificAnswers
        );
        let hit = responder.match_query("قرآن میں کتنی سورتیں ہیں", &kb);
        assert_eq!(hit.matched_record.map(|r| r.id.as_str()), Some("quran_surahs"));
    }

    struct PanickingCorpus;

    impl VerseSearcher for PanickingCorpus {
        fn is_available(&self) -> bool {
            true
        }

        fn search(&self, _query: &str) -> crate::Result<VerseSearchResult> {
            panic!("corpus exploded")
        }
    }

    #[test]
    fn test_respond_catches_panics() {
        let responder = Responder::new().with_corpus(Arc::new(PanickingCorpus));
        let response = responder.respond("موسم کیسا ہے", &kb(), &mut rng());
        assert_eq!(response.confidence, Confidence::None);
        assert_eq!(response.intent, Intent::Unknown);
    }
}
