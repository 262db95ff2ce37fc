//! Report lookup: selection → key → page id → page text → panel state.
//!
//! Independent of the DOM; the page component only renders [`ReportPanel`].

use super::api;
use crate::shared::request_sequence::RequestSequence;
use contracts::domain::a001_report::{ReportKeyMapping, ReportSelection};

pub const PROMPT_TEXT: &str =
    "조회를 원하는 날짜와 에이전트 유형을 선택해주세요.\n2023년 중 개장일에 대해 조회가 가능합니다.";
pub const NO_REPORT_TEXT: &str = "조회할 수 있는 보고서가 없습니다.";
pub const LOADING_TEXT: &str = "정보를 불러오는 중입니다...";

/// Что показывает правая часть страницы отчётов
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportPanel {
    /// Nothing selected yet
    #[default]
    Prompt,
    /// Page id found, text on its way; content cleared
    Pending,
    Document(String),
    /// Any miss: unknown key, failed mapping fetch, failed or empty page text
    NoReport,
}

impl ReportPanel {
    /// Placeholder text, `None` while a document is shown or loading
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ReportPanel::Prompt => Some(PROMPT_TEXT),
            ReportPanel::NoReport => Some(NO_REPORT_TEXT),
            ReportPanel::Pending | ReportPanel::Document(_) => None,
        }
    }
}

/// Lines of a document; each `\n` becomes a line break when rendered.
pub fn text_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Where the mapping and the page texts come from
#[allow(async_fn_in_trait)]
pub trait ReportSource {
    async fn fetch_mapping(&self) -> Result<ReportKeyMapping, String>;
    async fn fetch_page_text(&self, page_id: &str) -> Result<String, String>;
}

/// Backend-backed source
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpReportSource;

impl ReportSource for HttpReportSource {
    async fn fetch_mapping(&self) -> Result<ReportKeyMapping, String> {
        api::get_mapping().await
    }

    async fn fetch_page_text(&self, page_id: &str) -> Result<String, String> {
        api::get_page_text(page_id).await
    }
}

#[derive(Debug, Clone)]
pub struct ReportLookup<S> {
    source: S,
    sequence: RequestSequence,
}

impl<S: ReportSource> ReportLookup<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            sequence: RequestSequence::new(),
        }
    }

    /// Runs one lookup for the current selection.
    ///
    /// An incomplete selection does nothing. Every panel change goes through
    /// `apply`; results of a lookup superseded by a later call are dropped.
    pub async fn run(&self, selection: &ReportSelection, mut apply: impl FnMut(ReportPanel)) {
        let Some(query) = selection.complete() else {
            return;
        };

        let ticket = self.sequence.next();
        let key = query.key();
        log::debug!("report lookup: {}", key);

        // Fresh snapshot every time
        let mapping = self.source.fetch_mapping().await;
        if !self.sequence.is_current(ticket) {
            log::debug!("report lookup superseded: {}", key);
            return;
        }

        let mapping = match mapping {
            Ok(mapping) => mapping,
            Err(e) => {
                log::error!("Failed to load report mapping: {}", e);
                apply(ReportPanel::NoReport);
                return;
            }
        };

        let Some(page_id) = mapping.lookup(&key).map(str::to_string) else {
            log::info!("no report for key {}", key);
            apply(ReportPanel::NoReport);
            return;
        };

        apply(ReportPanel::Pending);

        let text = self.source.fetch_page_text(&page_id).await;
        if !self.sequence.is_current(ticket) {
            log::debug!("report lookup superseded: {}", key);
            return;
        }

        match text {
            Ok(text) if !text.is_empty() => apply(ReportPanel::Document(text)),
            Ok(_) => {
                log::warn!("report page {} is empty", page_id);
                apply(ReportPanel::NoReport);
            }
            Err(e) => {
                log::error!("Failed to load report page {}: {}", page_id, e);
                apply(ReportPanel::NoReport);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a001_report::{resolve_key, AgentRole, TimeSlot};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, VecDeque};
    use std::future::Future;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    /// Source with canned responses; mapping and page text responses may be
    /// gated on a channel.
    #[derive(Default)]
    struct FakeSource {
        mapping: ReportKeyMapping,
        mapping_fails: bool,
        texts: HashMap<String, Result<String, String>>,
        gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
        text_gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        mapping_calls: Cell<usize>,
        text_calls: Cell<usize>,
    }

    impl ReportSource for &FakeSource {
        async fn fetch_mapping(&self) -> Result<ReportKeyMapping, String> {
            self.mapping_calls.set(self.mapping_calls.get() + 1);
            let gate = self.gates.borrow_mut().pop_front();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            if self.mapping_fails {
                return Err("HTTP error: 404".into());
            }
            Ok(self.mapping.clone())
        }

        async fn fetch_page_text(&self, page_id: &str) -> Result<String, String> {
            self.text_calls.set(self.text_calls.get() + 1);
            let gate = self.text_gates.borrow_mut().remove(page_id);
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.texts
                .get(page_id)
                .cloned()
                .unwrap_or_else(|| Err("HTTP error: 404".into()))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn selection(day: NaiveDate, role: AgentRole, slot: TimeSlot) -> ReportSelection {
        let mut selection = ReportSelection::new();
        selection.set_date(Some(day));
        selection.set_agent_slot(role, slot);
        selection
    }

    fn source_with(entries: &[(NaiveDate, AgentRole, TimeSlot, &str, &str)]) -> FakeSource {
        let mut source = FakeSource::default();
        for (day, role, slot, page_id, text) in entries {
            source.mapping.insert(&resolve_key(*day, *role, *slot), *page_id);
            source
                .texts
                .insert(page_id.to_string(), Ok(text.to_string()));
        }
        source
    }

    fn run_collect(source: &FakeSource, selection: &ReportSelection) -> Vec<ReportPanel> {
        let lookup = ReportLookup::new(source);
        let mut panels = Vec::new();
        block_on(lookup.run(selection, |panel| panels.push(panel)));
        panels
    }

    /// Returns Pending once so that other joined futures get polled.
    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    #[test]
    fn test_hit_renders_document() {
        let source = source_with(&[(
            date(2023, 1, 3),
            AgentRole::Analyst,
            TimeSlot::PreMarket,
            "page-1",
            "첫 줄\n둘째 줄",
        )]);

        let panels = run_collect(
            &source,
            &selection(date(2023, 1, 3), AgentRole::Analyst, TimeSlot::PreMarket),
        );
        assert_eq!(
            panels,
            vec![
                ReportPanel::Pending,
                ReportPanel::Document("첫 줄\n둘째 줄".into())
            ]
        );
    }

    #[test]
    fn test_intraday_slots_share_one_report() {
        let source = source_with(&[(
            date(2023, 6, 15),
            AgentRole::Trader,
            TimeSlot::Morning,
            "log-page",
            "log",
        )]);

        for slot in [TimeSlot::Morning, TimeSlot::Midday, TimeSlot::Afternoon] {
            let panels = run_collect(&source, &selection(date(2023, 6, 15), AgentRole::Trader, slot));
            assert_eq!(panels.last(), Some(&ReportPanel::Document("log".into())));
        }
    }

    #[test]
    fn test_missing_key_is_no_report() {
        let source = source_with(&[(
            date(2023, 1, 3),
            AgentRole::Analyst,
            TimeSlot::PreMarket,
            "page-1",
            "text",
        )]);

        let panels = run_collect(
            &source,
            &selection(date(2023, 1, 3), AgentRole::Trader, TimeSlot::PreMarket),
        );
        assert_eq!(panels, vec![ReportPanel::NoReport]);
        assert_eq!(source.text_calls.get(), 0);
    }

    #[test]
    fn test_every_failure_uses_the_same_no_report_state() {
        let day = date(2023, 12, 31);
        let sel = selection(day, AgentRole::Trader, TimeSlot::PostMarket);

        // mapping fetch fails
        let mut source = source_with(&[(day, AgentRole::Trader, TimeSlot::PostMarket, "p", "t")]);
        source.mapping_fails = true;
        assert_eq!(run_collect(&source, &sel), vec![ReportPanel::NoReport]);

        // page text fails
        let mut source = source_with(&[(day, AgentRole::Trader, TimeSlot::PostMarket, "p", "t")]);
        source.texts.insert("p".into(), Err("HTTP error: 500".into()));
        assert_eq!(
            run_collect(&source, &sel),
            vec![ReportPanel::Pending, ReportPanel::NoReport]
        );

        // page text empty
        let source = source_with(&[(day, AgentRole::Trader, TimeSlot::PostMarket, "p", "")]);
        assert_eq!(
            run_collect(&source, &sel),
            vec![ReportPanel::Pending, ReportPanel::NoReport]
        );
    }

    #[test]
    fn test_incomplete_selection_does_nothing() {
        let source = FakeSource::default();

        let mut only_date = ReportSelection::new();
        only_date.set_date(Some(date(2023, 1, 3)));
        let mut only_agent = ReportSelection::new();
        only_agent.set_agent_slot(AgentRole::Analyst, TimeSlot::Midday);

        for sel in [ReportSelection::new(), only_date, only_agent] {
            assert!(run_collect(&source, &sel).is_empty());
        }
        assert_eq!(source.mapping_calls.get(), 0);
    }

    #[test]
    fn test_superseded_lookup_never_overwrites_newer_one() {
        let day_a = date(2023, 3, 2);
        let day_b = date(2023, 3, 3);
        let source = source_with(&[
            (day_a, AgentRole::Analyst, TimeSlot::PreMarket, "page-a", "A"),
            (day_b, AgentRole::Analyst, TimeSlot::PreMarket, "page-b", "B"),
        ]);
        let (tx_a, rx_a) = oneshot::channel();
        let (tx_b, rx_b) = oneshot::channel();
        source.gates.borrow_mut().extend([rx_a, rx_b]);

        let lookup = ReportLookup::new(&source);
        let panel = Rc::new(RefCell::new(ReportPanel::Prompt));
        let sel_a = selection(day_a, AgentRole::Analyst, TimeSlot::PreMarket);
        let sel_b = selection(day_b, AgentRole::Analyst, TimeSlot::PreMarket);

        block_on(async {
            let a = lookup.run(&sel_a, {
                let panel = panel.clone();
                move |p| *panel.borrow_mut() = p
            });
            let b = lookup.run(&sel_b, {
                let panel = panel.clone();
                move |p| *panel.borrow_mut() = p
            });
            // B's mapping arrives first, A's afterwards
            let driver = async {
                let _ = tx_b.send(());
                YieldNow(false).await;
                YieldNow(false).await;
                let _ = tx_a.send(());
            };
            futures::join!(a, b, driver);
        });

        assert_eq!(*panel.borrow(), ReportPanel::Document("B".into()));
        assert_eq!(source.text_calls.get(), 1);
    }

    #[test]
    fn test_late_page_text_of_superseded_lookup_is_dropped() {
        let day_a = date(2023, 4, 3);
        let day_b = date(2023, 4, 4);
        let source = source_with(&[
            (day_a, AgentRole::Trader, TimeSlot::PostMarket, "page-a", "A"),
            (day_b, AgentRole::Trader, TimeSlot::PostMarket, "page-b", "B"),
        ]);
        let (tx_a, rx_a) = oneshot::channel();
        source.text_gates.borrow_mut().insert("page-a".into(), rx_a);

        let lookup = ReportLookup::new(&source);
        let applied = Rc::new(RefCell::new(Vec::new()));
        let sel_a = selection(day_a, AgentRole::Trader, TimeSlot::PostMarket);
        let sel_b = selection(day_b, AgentRole::Trader, TimeSlot::PostMarket);

        block_on(async {
            let a = lookup.run(&sel_a, {
                let applied = applied.clone();
                move |p| applied.borrow_mut().push(("a", p))
            });
            let b = lookup.run(&sel_b, {
                let applied = applied.clone();
                move |p| applied.borrow_mut().push(("b", p))
            });
            // A's text arrives only after B has rendered its document
            let driver = async {
                YieldNow(false).await;
                YieldNow(false).await;
                let _ = tx_a.send(());
            };
            futures::join!(a, b, driver);
        });

        assert_eq!(
            *applied.borrow(),
            vec![
                ("a", ReportPanel::Pending),
                ("b", ReportPanel::Pending),
                ("b", ReportPanel::Document("B".into())),
            ]
        );
        assert_eq!(source.text_calls.get(), 2);
    }

    #[test]
    fn test_placeholders_and_lines() {
        assert_eq!(ReportPanel::Prompt.placeholder(), Some(PROMPT_TEXT));
        assert_eq!(ReportPanel::NoReport.placeholder(), Some(NO_REPORT_TEXT));
        assert_eq!(ReportPanel::Pending.placeholder(), None);
        assert_eq!(ReportPanel::Document("x".into()).placeholder(), None);
        assert_eq!(text_lines("a\nb\n"), vec!["a", "b", ""]);
    }
}
