//! End-to-end pipeline tests against counting mock upstreams.
//!
//! The mock records every upstream call, so validation-failure tests can
//! assert that no network work would have happened at all.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use riftbot::ports::{
    BuildService, MasteryService, MatchService, RankedService, StreamsService, SummonerService,
};
use riftbot::{
    Bot, BotReply, BuildPayload, CallerProfile, CatalogEntry, CatalogKind, ChatContext,
    Invocation, Markup, MasteryEntry, MatchRecord, Participant, ProfileMap, RankedEntry, Region,
    Services, StaticDataHandle, StreamEntry, Summoner, UpstreamError,
};

#[derive(Default)]
struct MockUpstream {
    calls: AtomicUsize,
    summoner: Option<Summoner>,
    ranked: Option<Vec<RankedEntry>>,
    mastery: Option<Vec<MasteryEntry>>,
    latest_match: Option<i64>,
    record: Option<MatchRecord>,
    build: Option<BuildPayload>,
    streams: Vec<StreamEntry>,
}

impl MockUpstream {
    fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SummonerService for MockUpstream {
    async fn by_name(&self, _: Region, _: &str) -> Result<Option<Summoner>, UpstreamError> {
        self.tick();
        Ok(self.summoner.clone())
    }
}

#[async_trait]
impl RankedService for MockUpstream {
    async fn entries(&self, _: Region, _: i64) -> Result<Option<Vec<RankedEntry>>, UpstreamError> {
        self.tick();
        Ok(self.ranked.clone())
    }
}

#[async_trait]
impl MasteryService for MockUpstream {
    async fn top_champions(
        &self,
        _: Region,
        _: i64,
        _: u32,
    ) -> Result<Option<Vec<MasteryEntry>>, UpstreamError> {
        self.tick();
        Ok(self.mastery.clone())
    }
}

#[async_trait]
impl MatchService for MockUpstream {
    async fn latest_match_id(&self, _: Region, _: i64) -> Result<Option<i64>, UpstreamError> {
        self.tick();
        Ok(self.latest_match)
    }

    async fn match_by_id(&self, _: Region, _: i64) -> Result<Option<MatchRecord>, UpstreamError> {
        self.tick();
        Ok(self.record.clone())
    }
}

#[async_trait]
impl BuildService for MockUpstream {
    async fn winrate_build(
        &self,
        _: &str,
        _: Option<riftbot::Role>,
    ) -> Result<Option<BuildPayload>, UpstreamError> {
        self.tick();
        Ok(self.build.clone())
    }
}

#[async_trait]
impl StreamsService for MockUpstream {
    async fn top_streams(&self, count: u32) -> Result<Vec<StreamEntry>, UpstreamError> {
        self.tick();
        Ok(self.streams.iter().take(count as usize).cloned().collect())
    }
}

fn services(mock: &Arc<MockUpstream>) -> Services {
    Services {
        summoner: mock.clone(),
        ranked: mock.clone(),
        mastery: mock.clone(),
        matches: mock.clone(),
        builds: mock.clone(),
        streams: mock.clone(),
    }
}

fn profiles() -> ProfileMap {
    ProfileMap::new(HashMap::from([(
        "HolyZuzik".to_string(),
        CallerProfile {
            region: Region::Eune,
            player_name: "Wakafa".to_string(),
            game_invites: true,
        },
    )]))
}

fn statics_with_champions() -> StaticDataHandle {
    let handle = StaticDataHandle::empty();
    handle.load(
        CatalogKind::Champions,
        HashMap::from([(
            157,
            CatalogEntry {
                id: 157,
                name: "Yasuo".to_string(),
                key: "Yasuo".to_string(),
            },
        )]),
    );
    handle
}

fn invocation(text: &str) -> Invocation {
    Invocation {
        raw_text: text.to_string(),
        caller_id: "HolyZuzik".to_string(),
        display_name: "Zuz".to_string(),
        chat: ChatContext {
            kind: "group".to_string(),
            title: Some("the rift".to_string()),
        },
    }
}

fn wakafa() -> Summoner {
    Summoner {
        id: 42,
        account_id: 4242,
        name: "Wakafa".to_string(),
    }
}

async fn handle(mock: &Arc<MockUpstream>, statics: StaticDataHandle, text: &str) -> Option<BotReply> {
    let bot = Bot::new(services(mock), statics, profiles());
    bot.handle(&invocation(text)).await
}

#[tokio::test]
async fn zero_arg_ranked_resolves_profile_and_formats_standings() {
    let mock = Arc::new(MockUpstream {
        summoner: Some(wakafa()),
        ranked: Some(vec![RankedEntry {
            queue: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            division: "II".to_string(),
            league_points: 45,
        }]),
        ..Default::default()
    });

    let reply = handle(&mock, StaticDataHandle::empty(), "/ranked")
        .await
        .expect("allow-listed caller gets a reply");

    assert!(reply.text.contains("*Ranked Standings - Wakafa*"));
    assert!(reply.text.contains("Solo/Duo - GOLD II (45 points)"));
    assert_eq!(reply.markup, Markup::Markdown);
    // Summoner lookup plus the ranked call, nothing else.
    assert_eq!(mock.count(), 2);
}

#[tokio::test]
async fn invalid_region_is_rejected_before_any_upstream_call() {
    let mock = Arc::new(MockUpstream {
        summoner: Some(wakafa()),
        ..Default::default()
    });

    let reply = handle(&mock, StaticDataHandle::empty(), "/ranked XX SomeName")
        .await
        .expect("validation failures still reply");

    assert!(reply.text.contains("XX"));
    for region in Region::ALL {
        assert!(reply.text.contains(region.code()), "missing {}", region);
    }
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn unknown_caller_gets_no_reply() {
    let mock = Arc::new(MockUpstream::default());
    let bot = Bot::new(services(&mock), StaticDataHandle::empty(), profiles());

    let mut inv = invocation("/ranked");
    inv.caller_id = "stranger".to_string();

    assert!(bot.handle(&inv).await.is_none());
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn unknown_command_gets_no_reply() {
    let mock = Arc::new(MockUpstream::default());
    let reply = handle(&mock, StaticDataHandle::empty(), "/dance").await;
    assert!(reply.is_none());
}

#[tokio::test]
async fn missing_player_is_an_empty_outcome() {
    let mock = Arc::new(MockUpstream::default());

    let reply = handle(&mock, StaticDataHandle::empty(), "/ranked na Nobody")
        .await
        .unwrap();

    assert_eq!(reply.text, "Summoner not found.");
    assert_eq!(mock.count(), 1);
}

#[tokio::test]
async fn ranked_with_no_entries_reports_no_data() {
    let mock = Arc::new(MockUpstream {
        summoner: Some(wakafa()),
        ranked: Some(vec![]),
        ..Default::default()
    });

    let reply = handle(&mock, StaticDataHandle::empty(), "/ranked").await.unwrap();
    assert_eq!(reply.text, "No ranked data for Wakafa");
}

#[tokio::test]
async fn recent_match_without_target_participant_is_empty_not_a_crash() {
    let mock = Arc::new(MockUpstream {
        summoner: Some(wakafa()),
        latest_match: Some(9001),
        record: Some(MatchRecord {
            game_mode: "CLASSIC".to_string(),
            queue: "RANKED_SOLO_5x5".to_string(),
            duration_secs: 1800,
            participants: vec![Participant {
                summoner_name: "Somebody Else".to_string(),
                champion_id: 157,
                win: true,
                ..sample_participant()
            }],
        }),
        ..Default::default()
    });

    let reply = handle(&mock, statics_with_champions(), "/recent").await.unwrap();
    assert_eq!(reply.text, "Couldn't find Wakafa in their latest game");
    // Summoner, match summary, match detail.
    assert_eq!(mock.count(), 3);
}

#[tokio::test]
async fn recent_match_formats_the_matching_participant() {
    let mock = Arc::new(MockUpstream {
        summoner: Some(wakafa()),
        latest_match: Some(9001),
        record: Some(MatchRecord {
            game_mode: "CLASSIC".to_string(),
            queue: "RANKED_SOLO_5x5".to_string(),
            duration_secs: 1865,
            // In-match casing differs; matching is normalized.
            participants: vec![Participant {
                summoner_name: "WAKAFA".to_string(),
                ..sample_participant()
            }],
        }),
        ..Default::default()
    });

    let reply = handle(&mock, statics_with_champions(), "/recent").await.unwrap();
    assert!(reply.text.contains("*Recent Game - Wakafa*"));
    assert!(reply.text.contains("VICTORY - Ranked Solo/Duo (31:05)"));
    assert!(reply.text.contains("12/3/9 as Yasuo"));
}

#[tokio::test]
async fn build_resolves_aliases_against_the_catalog() {
    let mock = Arc::new(MockUpstream {
        build: Some(BuildPayload {
            role: "MIDDLE".to_string(),
            win_rate: 54.3,
            hashes: riftbot::BuildHashes {
                final_items: Some("9999".to_string()),
                ..Default::default()
            },
        }),
        ..Default::default()
    });

    let reply = handle(&mock, statics_with_champions(), "/build mid yass")
        .await
        .unwrap();

    assert!(reply.text.contains("*Yasuo - Mid build* (54.3% win rate)"));
    // Item catalog is empty, so the formatter degrades to the raw ID.
    assert!(reply.text.contains("Final items: #9999"));
    assert_eq!(mock.count(), 1);
}

#[tokio::test]
async fn unknown_champion_is_rejected_before_any_upstream_call() {
    let mock = Arc::new(MockUpstream::default());

    let reply = handle(&mock, statics_with_champions(), "/build nosuch")
        .await
        .unwrap();

    assert_eq!(reply.text, "Unknown champion 'nosuch'.");
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn game_announcement_mentions_invitees_but_not_the_sender() {
    let mock = Arc::new(MockUpstream::default());
    let profile = |invites: bool| CallerProfile {
        region: Region::Eune,
        player_name: "x".to_string(),
        game_invites: invites,
    };
    let profiles = ProfileMap::new(HashMap::from([
        ("HolyZuzik".to_string(), profile(true)),
        ("friend".to_string(), profile(true)),
        ("optout".to_string(), profile(false)),
    ]));
    let bot = Bot::new(services(&mock), StaticDataHandle::empty(), profiles);

    let reply = bot.handle(&invocation("/game")).await.unwrap();

    assert!(reply.text.contains("is looking for feeders for the rift!"));
    assert!(reply.text.contains("@friend"));
    assert!(!reply.text.contains("@HolyZuzik"));
    assert!(!reply.text.contains("@optout"));
    assert_eq!(reply.markup, Markup::Plain);
    assert_eq!(mock.count(), 0);
}

#[tokio::test]
async fn twitch_reply_is_html_without_previews() {
    let mock = Arc::new(MockUpstream {
        streams: vec![StreamEntry {
            channel: "shiphtur".to_string(),
            status: "mid grind".to_string(),
            viewers: 9000,
            url: "https://twitch.tv/shiphtur".to_string(),
        }],
        ..Default::default()
    });

    let reply = handle(&mock, StaticDataHandle::empty(), "/twitch").await.unwrap();
    assert_eq!(reply.markup, Markup::Html);
    assert!(reply.disable_web_preview);
    assert!(reply.text.contains("shiphtur"));
}

fn sample_participant() -> Participant {
    Participant {
        summoner_name: "Wakafa".to_string(),
        champion_id: 157,
        win: true,
        kills: 12,
        deaths: 3,
        assists: 9,
        minions_killed: 180,
        neutral_minions_killed: 20,
        gold_earned: 14_350,
        damage_to_champions: 31_042,
    }
}
