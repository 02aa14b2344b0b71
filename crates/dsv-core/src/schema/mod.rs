//! Field allowlist schemas
//!
//! Externally supplied lists of the fields to retain per record kind.
//! Anything the upstream service sends that is not listed here is dropped
//! during normalization.

/// Fields retained per player roster entry.
pub const PLAYER_FIELDS: &[&str] = &[
    "Nationality",
    "EU",
    "RegID",
    "FirstName",
    "LastName",
    "FirstName2",
    "LastName2",
    "Born",
    "Cap",
    "Cap2",
];

/// Fields retained per game-plan (timeline) entry.
pub const GAMEPLAN_FIELDS: &[&str] = &[
    "GamePlanHome",
    "GamePlanGuest",
    "GamePlanPlayer",
    "PeriodShow",
    "LiveGoals",
    "HomeRegID",
    "HomeTeamID",
    "GuestRegID",
    "GuestTeamID",
    "RegID",
    "FirstName",
    "LastName",
    "Cap",
    "Cap2",
    "EventTime",
    "EventKey",
    "EventCode",
    "EventName",
    "ClubRegID",
    "Extra",
    "Period",
    "Place",
    "PlaceCompared",
    "HomeGoals",
    "GuestGoals",
    "Number",
    "ClubName",
    "TeamID",
    "Status",
    "Reason",
];

/// Fields retained per period score entry.
pub const PERIOD_FIELDS: &[&str] = &["Period", "HomeGoals", "GuestGoals"];

/// Fields retained on the top-level match object.
pub const GAME_FIELDS: &[&str] = &[
    "CountryID",
    "PlayKind",
    "ProtocolKind",
    "EndGame",
    "PublicTotal",
    "GroupIDParent",
    "GroupName",
    "GroupID",
    "Level",
    "StateID",
    "RegionID",
    "AgeMin",
    "AgeMax",
    "Lowest",
    "StateName",
    "RegionName",
    "BaseClubRegID",
    "BaseClubName",
    "StatusHtml",
    "ScoreMorePublic",
    "StatusPeriodsPublic",
    "ScoreText",
    "ScorePeriods",
    "Observer",
    "Observer1",
    "Observer2",
    "GoalsPeriods",
    "GamePlan",
    "HomePlayers",
    "GuestPlayers",
    "OfficialsPublic",
    "HomeGoalsFinal",
    "GuestGoalsFinal",
    "HomePointsWon",
    "GuestPointsWon",
    "HomePointsLost",
    "GuestPointsLost",
    "HomeGamesWon",
    "GuestGamesWon",
    "HomeGamesLost",
    "GuestGamesLost",
    "HomeGamesTied",
    "GuestGamesTied",
    "OrganizerClubName",
    "RoundLeader",
    "NotesRound",
    "LeagueData",
    "SubLeague",
    "LeagueName",
    "LeagueNameRound",
    "LeagueNameLive",
    "PeriodShow",
    "LiveShortText",
    "LiveShortCSS",
    "LiveDetailText",
    "LiveDetailCSS",
    "Comment",
    "Location",
    "LiveGoals",
    "BornMin",
    "BornMax",
    "VideoLink",
    "Season",
    "LeagueID",
    "GameID",
    "GameIDShow",
    "Gruppe",
    "StartDate",
    "EndProtocol",
    "HomeRegID",
    "Gender",
    "LeagueText",
    "HomeTeamID",
    "HomeClubname",
    "GuestRegID",
    "GuestTeamID",
    "GuestClubname",
    "PoolName",
    "PoolCity",
    "PoolID",
    "Turnierleiter",
    "Schiedsrichter1",
    "Schiedsrichter2",
    "Bemerkungen",
    "ClubRegID",
    "UpdateDate",
    "HomeCaptain",
    "HomeBest",
    "HomeCoach",
    "HomeCoachID",
    "HomeBetreuer",
    "HomeLeiter",
    "GuestCoach",
    "GuestCaptain",
    "GuestBest",
    "GuestCoachID",
    "GuestBetreuer",
    "GuestLeiter",
    "Active",
    "GameKind",
    "Value",
    "Text",
    "GameDay",
    "NewGameDay",
    "Organizer",
    "TD",
    "PlayoffHomeRegID",
    "PlayoffText",
    "BestOf",
    "OrderID",
    "LeagueKind",
    "CommentGoals",
];
