//! In-memory portal data served by the mock backend.
//!
//! The dataset is small but covers every screen:
//! - twelve words across two groups, plus an empty group
//! - two study activities
//! - three study sessions with a handful of reviews, one of them incomplete
//!   so that "continue learning" has something to show

use std::cmp::Ordering;
use std::collections::HashSet;

use payloads::{
    ContinueLearningSession, GroupDetail, GroupId, GroupStats,
    GroupStudySession, GroupSummary, LastStudySession, PaginationState,
    Paginated, PerformanceGraphPoint, QuickStats, StudyActivity,
    StudyActivityId, StudyActivityLaunch, StudyProgress, StudySession,
    StudySessionId, Word, WordDetail, WordId, WordParts, WordReviewRecorded,
    WordStats,
};

/// (portuguese, kimbundu, english)
const WORDS: &[(&str, &str, &str)] = &[
    ("água", "menha", "water"),
    ("casa", "inzo", "house"),
    ("pessoa", "mutu", "person"),
    ("criança", "mona", "child"),
    ("comida", "kudia", "food"),
    ("mão", "lukuaku", "hand"),
    ("fogo", "tubia", "fire"),
    ("sol", "kumbi", "sun"),
    ("lua", "mbeji", "moon"),
    ("árvore", "muxi", "tree"),
    ("rio", "lui", "river"),
    ("pedra", "ditadi", "stone"),
];

#[derive(Debug, Clone)]
pub struct GroupRecord {
    pub id: GroupId,
    pub name: String,
    pub word_ids: Vec<WordId>,
}

#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: StudySessionId,
    pub group_id: GroupId,
    pub activity_id: StudyActivityId,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct ReviewRecord {
    pub id: i64,
    pub word_id: WordId,
    pub session_id: StudySessionId,
    pub correct: bool,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub words: Vec<(WordId, WordParts)>,
    pub groups: Vec<GroupRecord>,
    pub activities: Vec<StudyActivity>,
    pub sessions: Vec<SessionRecord>,
    pub reviews: Vec<ReviewRecord>,
}

impl Dataset {
    /// The dataset a full reset returns to.
    pub fn seeded() -> Self {
        let words: Vec<(WordId, WordParts)> = WORDS
            .iter()
            .enumerate()
            .map(|(i, (portuguese, kimbundu, english))| {
                (
                    WordId(i as i64 + 1),
                    WordParts {
                        portuguese: portuguese.to_string(),
                        kimbundu: kimbundu.to_string(),
                        english: english.to_string(),
                    },
                )
            })
            .collect();

        let groups = vec![
            GroupRecord {
                id: GroupId(1),
                name: "Basics".into(),
                word_ids: (1..=6).map(WordId).collect(),
            },
            GroupRecord {
                id: GroupId(2),
                name: "Nature".into(),
                word_ids: (7..=12).map(WordId).collect(),
            },
            GroupRecord {
                id: GroupId(3),
                name: "Empty".into(),
                word_ids: vec![],
            },
        ];

        let activities = vec![
            StudyActivity {
                id: StudyActivityId(1),
                name: "Flashcards".into(),
                description: "Flip cards from Portuguese to Kimbundu".into(),
                url: "http://localhost:8081".into(),
                preview_url: "/previews/flashcards.png".into(),
            },
            StudyActivity {
                id: StudyActivityId(2),
                name: "Typing Tutor".into(),
                description: "Type the Kimbundu word".into(),
                url: "http://localhost:8082".into(),
                preview_url: "/previews/typing.png".into(),
            },
        ];

        let sessions = vec![
            session(1, 1, 1, "2025-03-01 09:00:00"),
            session(2, 2, 1, "2025-03-02 09:00:00"),
            session(3, 1, 2, "2025-03-03 09:00:00"),
        ];

        let mut reviews = Vec::new();
        let mut push = |word: i64, session: i64, correct: bool| {
            let id = reviews.len() as i64 + 1;
            reviews.push(ReviewRecord {
                id,
                word_id: WordId(word),
                session_id: StudySessionId(session),
                correct,
                created_at: format!("2025-03-0{session} 09:0{}:00", id % 10),
            });
        };
        // Session 1 reviews all of Basics.
        for word in 1..=6 {
            push(word, 1, word != 3);
        }
        // Session 2 reviews all of Nature.
        for word in 7..=12 {
            push(word, 2, true);
        }
        // Session 3 stops halfway through Basics.
        for word in 1..=3 {
            push(word, 3, word != 2);
        }

        Self {
            words,
            groups,
            activities,
            sessions,
            reviews,
        }
    }

    fn word(&self, id: WordId, parts: &WordParts) -> Word {
        let (correct_count, wrong_count) = self.counts_for(id);
        Word {
            id,
            portuguese: parts.portuguese.clone(),
            kimbundu: parts.kimbundu.clone(),
            english: parts.english.clone(),
            correct_count,
            wrong_count,
            parts: Some(parts.clone()),
        }
    }

    fn counts_for(&self, id: WordId) -> (u32, u32) {
        self.reviews
            .iter()
            .filter(|r| r.word_id == id)
            .fold((0, 0), |(correct, wrong), r| {
                if r.correct {
                    (correct + 1, wrong)
                } else {
                    (correct, wrong + 1)
                }
            })
    }

    pub fn all_words(&self) -> Vec<Word> {
        self.words
            .iter()
            .map(|(id, parts)| self.word(*id, parts))
            .collect()
    }

    pub fn word_detail(&self, id: WordId) -> Option<WordDetail> {
        let (_, parts) = self.words.iter().find(|(w, _)| *w == id)?;
        let (correct_count, wrong_count) = self.counts_for(id);
        Some(WordDetail {
            id,
            portuguese: parts.portuguese.clone(),
            kimbundu: parts.kimbundu.clone(),
            english: parts.english.clone(),
            parts: Some(parts.clone()),
            stats: WordStats {
                correct_count,
                wrong_count,
            },
            groups: self
                .groups
                .iter()
                .filter(|g| g.word_ids.contains(&id))
                .map(|g| self.group_summary(g))
                .collect(),
        })
    }

    fn group_summary(&self, group: &GroupRecord) -> GroupSummary {
        GroupSummary {
            id: group.id,
            name: group.name.clone(),
            words_count: group.word_ids.len() as u32,
        }
    }

    pub fn all_groups(&self) -> Vec<GroupSummary> {
        self.groups.iter().map(|g| self.group_summary(g)).collect()
    }

    pub fn group_detail(&self, id: GroupId) -> Option<GroupDetail> {
        let group = self.groups.iter().find(|g| g.id == id)?;
        Some(GroupDetail {
            id,
            name: group.name.clone(),
            stats: GroupStats {
                total_words_count: group.word_ids.len() as u32,
            },
        })
    }

    pub fn group_words(&self, id: GroupId) -> Option<Vec<Word>> {
        let group = self.groups.iter().find(|g| g.id == id)?;
        Some(
            self.all_words()
                .into_iter()
                .filter(|w| group.word_ids.contains(&w.id))
                .collect(),
        )
    }

    pub fn group_study_sessions(&self, id: GroupId) -> Vec<GroupStudySession> {
        self.sessions
            .iter()
            .filter(|s| s.group_id == id)
            .map(|s| GroupStudySession {
                id: s.id,
                group_id: s.group_id,
                study_activity_id: s.activity_id,
                created_at: Some(s.created_at.clone()),
                activity_name: self.activity_name(s.activity_id),
                group_name: self.group_name(s.group_id),
            })
            .collect()
    }

    fn activity_name(&self, id: StudyActivityId) -> String {
        self.activities
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.clone())
            .unwrap_or_default()
    }

    fn group_name(&self, id: GroupId) -> String {
        self.groups
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.clone())
            .unwrap_or_default()
    }

    fn reviews_in(&self, id: StudySessionId) -> impl Iterator<Item = &ReviewRecord> {
        self.reviews.iter().filter(move |r| r.session_id == id)
    }

    fn session_view(&self, s: &SessionRecord) -> StudySession {
        StudySession {
            id: s.id,
            activity_name: self.activity_name(s.activity_id),
            group_name: self.group_name(s.group_id),
            start_time: Some(s.created_at.clone()),
            end_time: self
                .reviews_in(s.id)
                .map(|r| r.created_at.clone())
                .max()
                .or_else(|| Some(s.created_at.clone())),
            review_items_count: self.reviews_in(s.id).count() as u32,
        }
    }

    /// Newest first, as the backend lists them.
    pub fn all_study_sessions(&self) -> Vec<StudySession> {
        let mut sessions: Vec<_> =
            self.sessions.iter().map(|s| self.session_view(s)).collect();
        sessions.reverse();
        sessions
    }

    pub fn study_session(&self, id: StudySessionId) -> Option<StudySession> {
        self.sessions
            .iter()
            .find(|s| s.id == id)
            .map(|s| self.session_view(s))
    }

    pub fn study_session_words(&self, id: StudySessionId) -> Vec<Word> {
        let reviewed: HashSet<WordId> =
            self.reviews_in(id).map(|r| r.word_id).collect();
        self.all_words()
            .into_iter()
            .filter(|w| reviewed.contains(&w.id))
            .collect()
    }

    pub fn activity_sessions(&self, id: StudyActivityId) -> Vec<StudySession> {
        self.all_study_sessions()
            .into_iter()
            .filter(|s| s.activity_name == self.activity_name(id))
            .collect()
    }

    pub fn activity(&self, id: StudyActivityId) -> Option<StudyActivity> {
        self.activities.iter().find(|a| a.id == id).cloned()
    }

    pub fn activity_launch(
        &self,
        id: StudyActivityId,
    ) -> Option<StudyActivityLaunch> {
        Some(StudyActivityLaunch {
            activity: self.activity(id)?,
            groups: self.all_groups(),
        })
    }

    pub fn start_session(
        &mut self,
        group_id: GroupId,
        activity_id: StudyActivityId,
    ) -> Option<StudySession> {
        self.groups.iter().find(|g| g.id == group_id)?;
        self.activity(activity_id)?;
        let id = StudySessionId(
            self.sessions.iter().map(|s| s.id.0).max().unwrap_or(0) + 1,
        );
        self.sessions.push(SessionRecord {
            id,
            group_id,
            activity_id,
            created_at: "2025-03-10 09:00:00".into(),
        });
        self.study_session(id)
    }

    pub fn record_review(
        &mut self,
        session_id: StudySessionId,
        word_id: WordId,
        correct: bool,
    ) -> Option<WordReviewRecorded> {
        self.sessions.iter().find(|s| s.id == session_id)?;
        self.words.iter().find(|(w, _)| *w == word_id)?;
        let id = self.reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        let created_at = "2025-03-10 09:05:00".to_string();
        self.reviews.push(ReviewRecord {
            id,
            word_id,
            session_id,
            correct,
            created_at: created_at.clone(),
        });
        Some(WordReviewRecorded {
            success: true,
            id,
            word_id,
            study_session_id: session_id,
            correct,
            created_at: Some(created_at),
        })
    }

    pub fn reset_history(&mut self) {
        self.sessions.clear();
        self.reviews.clear();
    }

    pub fn last_study_session(&self) -> LastStudySession {
        let Some(last) = self.sessions.last() else {
            return LastStudySession {
                id: None,
                group_id: None,
                start_time: None,
                end_time: None,
                activity_name: None,
                group_name: None,
                correct_count: 0,
                wrong_count: 0,
            };
        };
        let view = self.session_view(last);
        let correct = self.reviews_in(last.id).filter(|r| r.correct).count();
        let wrong = self.reviews_in(last.id).filter(|r| !r.correct).count();
        LastStudySession {
            id: Some(last.id),
            group_id: Some(last.group_id),
            start_time: view.start_time,
            end_time: view.end_time,
            activity_name: Some(view.activity_name),
            group_name: Some(view.group_name),
            correct_count: correct as u32,
            wrong_count: wrong as u32,
        }
    }

    pub fn study_progress(&self) -> StudyProgress {
        let studied: HashSet<WordId> =
            self.reviews.iter().map(|r| r.word_id).collect();
        StudyProgress {
            total_words: self.words.len() as u32,
            studied_words: studied.len() as u32,
            studied_words_trend: 0.0,
        }
    }

    pub fn quick_stats(&self) -> QuickStats {
        let correct = self.reviews.iter().filter(|r| r.correct).count();
        let success_rate = if self.reviews.is_empty() {
            0.0
        } else {
            correct as f64 * 100.0 / self.reviews.len() as f64
        };
        let active_groups: HashSet<GroupId> =
            self.sessions.iter().map(|s| s.group_id).collect();
        QuickStats {
            success_rate,
            success_rate_trend: 0.0,
            total_study_sessions: self.sessions.len() as u32,
            total_active_groups: active_groups.len() as u32,
            study_streak_days: 0,
        }
    }

    pub fn performance_graph(&self) -> Vec<PerformanceGraphPoint> {
        self.sessions
            .iter()
            .map(|s| {
                let correct =
                    self.reviews_in(s.id).filter(|r| r.correct).count() as u32;
                let total = self.reviews_in(s.id).count() as u32;
                PerformanceGraphPoint {
                    id: s.id,
                    start_time: Some(s.created_at.clone()),
                    review_items_count: total,
                    correct_count: correct,
                    wrong_count: total - correct,
                }
            })
            .collect()
    }

    /// Up to three sessions with words of their group still unreviewed.
    pub fn continue_learning(&self) -> Vec<ContinueLearningSession> {
        self.sessions
            .iter()
            .rev()
            .filter_map(|s| {
                let group = self.groups.iter().find(|g| g.id == s.group_id)?;
                let reviewed: HashSet<WordId> =
                    self.reviews_in(s.id).map(|r| r.word_id).collect();
                (reviewed.len() < group.word_ids.len()).then(|| {
                    ContinueLearningSession {
                        id: s.id,
                        activity_id: s.activity_id,
                        group_id: s.group_id,
                        group_name: group.name.clone(),
                        review_items_count: reviewed.len() as u32,
                        total_words_count: group.word_ids.len() as u32,
                    }
                })
            })
            .take(3)
            .collect()
    }
}

fn session(id: i64, group: i64, activity: i64, at: &str) -> SessionRecord {
    SessionRecord {
        id: StudySessionId(id),
        group_id: GroupId(group),
        activity_id: StudyActivityId(activity),
        created_at: at.into(),
    }
}

/// Sort `items` by `column` using `key`, which returns `None` for unknown
/// columns. Unknown columns leave the order unchanged.
pub fn sort_by_column<T>(
    items: &mut [T],
    column: Option<&str>,
    descending: bool,
    key: impl Fn(&T, &str) -> Option<SortKey>,
) {
    let Some(column) = column.filter(|c| !c.is_empty()) else {
        return;
    };
    items.sort_by(|a, b| {
        let ordering = match (key(a, column), key(b, column)) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => Ordering::Equal,
        };
        if descending { ordering.reverse() } else { ordering }
    });
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Text(String),
}

pub fn word_sort_key(word: &Word, column: &str) -> Option<SortKey> {
    Some(match column {
        "id" => SortKey::Number(word.id.0),
        "portuguese" => SortKey::Text(word.portuguese.clone()),
        "kimbundu" => SortKey::Text(word.kimbundu.clone()),
        "english" => SortKey::Text(word.english.clone()),
        "correct_count" => SortKey::Number(word.correct_count.into()),
        "wrong_count" => SortKey::Number(word.wrong_count.into()),
        _ => return None,
    })
}

pub fn group_sort_key(group: &GroupSummary, column: &str) -> Option<SortKey> {
    Some(match column {
        "id" => SortKey::Number(group.id.0),
        "name" => SortKey::Text(group.name.clone()),
        "words_count" => SortKey::Number(group.words_count.into()),
        _ => return None,
    })
}

pub fn session_sort_key(
    session: &StudySession,
    column: &str,
) -> Option<SortKey> {
    Some(match column {
        "id" => SortKey::Number(session.id.0),
        "activity_name" => SortKey::Text(session.activity_name.clone()),
        "group_name" => SortKey::Text(session.group_name.clone()),
        "start_time" => SortKey::Text(session.start_time.clone()?),
        "review_items_count" => {
            SortKey::Number(session.review_items_count.into())
        }
        _ => return None,
    })
}

/// Slice out one page. Mirrors the backend, including `total_pages = 0` for
/// an empty list.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Paginated<T> {
    let total = items.len() as u64;
    let total_pages = total.div_ceil(u64::from(per_page)) as u32;
    let items = items
        .into_iter()
        .skip((page as usize - 1) * per_page as usize)
        .take(per_page as usize)
        .collect();
    Paginated {
        items,
        pagination: PaginationState {
            page,
            per_page,
            total,
            total_pages,
        },
    }
}
