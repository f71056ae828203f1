use color_eyre::eyre;
use color_eyre::Report;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Scalars that can be extracted from a benchmark statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// mean duration in milliseconds
    Mean,
    /// mean duration converted to seconds
    MeanSeconds,
    Sd,
    /// requests per second
    Rate,
    /// average request duration in milliseconds
    Avg,
    /// 95th percentile of request duration in milliseconds
    P95,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Mean => "mean",
            Metric::MeanSeconds => "mean (s)",
            Metric::Sd => "sd",
            Metric::Rate => "rate",
            Metric::Avg => "avg",
            Metric::P95 => "p(95)",
        }
    }
}

pub trait Statistic: DeserializeOwned {
    fn metric(&self, metric: Metric) -> Result<f64, Report>;
}

/// Client-side timing of an operation over several runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanSd {
    pub mean: f64,
    pub sd: f64,
}

impl MeanSd {
    pub fn new(mean: f64, sd: f64) -> Self {
        Self { mean, sd }
    }
}

impl Statistic for MeanSd {
    fn metric(&self, metric: Metric) -> Result<f64, Report> {
        match metric {
            Metric::Mean => Ok(self.mean),
            Metric::MeanSeconds => Ok(self.mean / 1000.0),
            Metric::Sd => Ok(self.sd),
            metric => eyre::bail!(
                "metric {} not available in client results",
                metric.name()
            ),
        }
    }
}

/// Summary written by the load testing tool at the end of a server run.
/// Only the metrics used in the report are kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadTest {
    pub metrics: LoadTestMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadTestMetrics {
    pub http_reqs: HttpReqs,
    pub http_req_duration: HttpReqDuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HttpReqs {
    pub values: RateValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateValues {
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HttpReqDuration {
    pub values: DurationValues,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationValues {
    pub avg: f64,
    #[serde(rename = "p(95)")]
    pub p95: f64,
}

impl LoadTest {
    pub fn new(rate: f64, avg: f64, p95: f64) -> Self {
        Self {
            metrics: LoadTestMetrics {
                http_reqs: HttpReqs {
                    values: RateValues { rate },
                },
                http_req_duration: HttpReqDuration {
                    values: DurationValues { avg, p95 },
                },
            },
        }
    }
}

impl Statistic for LoadTest {
    fn metric(&self, metric: Metric) -> Result<f64, Report> {
        let duration = &self.metrics.http_req_duration.values;
        match metric {
            Metric::Rate => Ok(self.metrics.http_reqs.values.rate),
            Metric::Avg => Ok(duration.avg),
            Metric::P95 => Ok(duration.p95),
            metric => eyre::bail!(
                "metric {} not available in load test results",
                metric.name()
            ),
        }
    }
}
