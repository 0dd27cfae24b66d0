#![allow(dead_code)]

// Aggregate metrics for the admin dashboard, computed on demand from a
// snapshot of the store. Score buckets and the funnel only ever count
// records that actually carry a score or reached the relevant stage.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Account, RecordStatus, Role, SubmissionRecord};
use crate::presence::{presence, Presence};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipelineCounts {
    pub uploaded: usize,
    pub analyzed: usize,
    pub shortlisted: usize,
    pub rejected: usize,
}

/// Scored submissions bucketed by band: excellent from 80, good from 60,
/// average from 40, poor below. Unscored records belong to no bucket.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub poor: usize,
}

/// Conversion funnel: everyone whose analysis completed, and where HR took
/// them from there.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunnelCounts {
    pub applied: usize,
    pub shortlisted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DirectoryCounts {
    pub total: usize,
    pub online: usize,
    pub hr: usize,
    pub admins: usize,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsReport {
    pub total_candidates: usize,
    /// Mean score across scored records, rounded to the nearest integer;
    /// 0 when nothing is scored yet.
    pub average_score: u32,
    pub pipeline: PipelineCounts,
    pub distribution: ScoreDistribution,
    pub funnel: FunnelCounts,
    pub directory: DirectoryCounts,
}

pub fn compute_stats(
    records: &[SubmissionRecord],
    accounts: &[Account],
    now: DateTime<Utc>,
) -> StatsReport {
    let count_status =
        |status: RecordStatus| records.iter().filter(|r| r.status == status).count();
    let pipeline = PipelineCounts {
        uploaded: count_status(RecordStatus::Uploaded),
        analyzed: count_status(RecordStatus::Analyzed),
        shortlisted: count_status(RecordStatus::Shortlisted),
        rejected: count_status(RecordStatus::Rejected),
    };

    let scores: Vec<u32> = records.iter().filter_map(|r| r.score).collect();
    let average_score = if scores.is_empty() {
        0
    } else {
        let sum: u32 = scores.iter().sum();
        (f64::from(sum) / scores.len() as f64).round() as u32
    };

    let count_band = |lo: u32, hi: u32| scores.iter().filter(|&&s| s >= lo && s <= hi).count();
    let distribution = ScoreDistribution {
        excellent: count_band(80, u32::MAX),
        good: count_band(60, 79),
        average: count_band(40, 59),
        poor: count_band(0, 39),
    };

    let funnel = FunnelCounts {
        applied: pipeline.analyzed,
        shortlisted: pipeline.shortlisted,
        rejected: pipeline.rejected,
    };

    let directory = DirectoryCounts {
        total: accounts.len(),
        online: accounts
            .iter()
            .filter(|a| presence(Some(a.last_action), now) == Presence::Online)
            .count(),
        hr: accounts.iter().filter(|a| a.role == Role::Hr).count(),
        admins: accounts.iter().filter(|a| a.role == Role::Admin).count(),
    };

    StatsReport {
        total_candidates: records.len(),
        average_score,
        pipeline,
        distribution,
        funnel,
        directory,
    }
}
