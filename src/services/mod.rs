/// Business logic services layer
use crate::clients::{NasaClient, UsnoClient};
use crate::config::AppConfig;
use crate::domain::{MoonEvent, MoonPhaseResponse, RsttData, NOT_AVAILABLE, PLACEHOLDER_IMAGE_URL};
use crate::errors::ApiResult;
use crate::utils::{parse_date, resolve_date, utc_time_to_local};
use chrono::{Local, NaiveDate};
use chrono_tz::Tz;
use tracing::{debug, error, warn};

/// Moon phase aggregation service
pub struct MoonPhaseService {
    config: AppConfig,
    usno_client: UsnoClient,
    nasa_client: NasaClient,
}

impl MoonPhaseService {
    pub fn new(config: AppConfig, usno_client: UsnoClient, nasa_client: NasaClient) -> Self {
        Self {
            config,
            usno_client,
            nasa_client,
        }
    }

    /// Build the moon phase record for `date`, or for today when absent.
    ///
    /// A failed USNO call fails the whole request; a failed APOD call only
    /// swaps the image for the placeholder.
    pub async fn moon_phase(&self, date: Option<&str>) -> ApiResult<MoonPhaseResponse> {
        let date = resolve_date(date);
        debug!(%date, coords = %self.config.location, "fetching moon data");

        let rstt = self
            .usno_client
            .fetch_one_day(&date, self.config.location)
            .await
            .inspect_err(|e| error!(%date, "moon data fetch failed: {e}"))?;
        let data = rstt.properties.data;

        let anchor = data
            .date()
            .or_else(|| parse_date(&date))
            .unwrap_or_else(|| Local::now().date_naive());
        let tz = self.config.timezone;

        let moon_rise_time = local_event_time(&data, MoonEvent::Rise, anchor, tz);
        let moon_set_time = local_event_time(&data, MoonEvent::Set, anchor, tz);
        let moon_transit_time = local_event_time(&data, MoonEvent::UpperTransit, anchor, tz);

        let image_url = self.image_url().await;

        Ok(MoonPhaseResponse {
            current_phase: data.curphase,
            fractional_illumination: data.fracillum,
            moon_rise_time,
            moon_set_time,
            moon_transit_time,
            image_url,
        })
    }

    /// APOD image URL, or the placeholder on any failure
    pub async fn image_url(&self) -> String {
        match self.nasa_client.fetch_apod().await {
            Ok(apod) => match apod.url.filter(|u| !u.is_empty()) {
                Some(url) => url,
                None => {
                    warn!("APOD response carried no image url");
                    PLACEHOLDER_IMAGE_URL.to_string()
                }
            },
            Err(e) => {
                warn!("Error fetching APOD image: {e}");
                PLACEHOLDER_IMAGE_URL.to_string()
            }
        }
    }
}

fn local_event_time(data: &RsttData, event: MoonEvent, anchor: NaiveDate, tz: Tz) -> String {
    data.first_time_of(event)
        .and_then(|t| utc_time_to_local(t, anchor, tz))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
