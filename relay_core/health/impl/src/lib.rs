use relay_core_health_contracts::{HealthFeatureService, HealthStatus};
use relay_di::Build;
use relay_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Build)]
pub struct HealthFeatureServiceImpl<Time> {
    time: Time,
}

impl<Time> HealthFeatureService for HealthFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    async fn get_status(&self) -> HealthStatus {
        HealthStatus {
            timestamp: self.time.now().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};
    use relay_models::time::UtcTimestamp;
    use relay_shared_contracts::time::MockTimeService;

    use super::*;

    #[tokio::test]
    async fn get_status() {
        // Arrange
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 13, 37, 42).unwrap();
        let time = MockTimeService::new().with_now(now + TimeDelta::microseconds(1337));

        let sut = HealthFeatureServiceImpl { time };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result.timestamp, UtcTimestamp::new(now));
        assert_eq!(result.timestamp.to_string(), "2024-07-01T13:37:42 UTC");
    }
}
