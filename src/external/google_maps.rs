use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    entities::TravelMode,
    error::{invalid_input_error, upstream_error, Error},
    external::{Maps, PlaceSummary, Rating, RouteDetails, RouteStep},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GoogleMaps {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn new(api_base: String, api_key: String) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base,
            api_key,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response<T> {
    status: String,
    results: Option<T>,
    routes: Option<T>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct SearchResult {
    name: String,
    formatted_address: Option<String>,
    rating: Option<f64>,
    geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct CandidateRoute {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Leg {
    start_address: String,
    end_address: String,
    distance: TextValue,
    duration: TextValue,
    steps: Vec<Step>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Step {
    html_instructions: String,
    distance: TextValue,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct TextValue {
    text: String,
}

impl SearchResult {
    fn summarize(self) -> PlaceSummary {
        PlaceSummary {
            name: self.name,
            address: self
                .formatted_address
                .unwrap_or_else(|| "address unknown".into()),
            rating: match self.rating {
                Some(score) => Rating::Score(score),
                None => Rating::Unrated("no rating".into()),
            },
            lat: self.geometry.location.lat,
            lng: self.geometry.location.lng,
        }
    }
}

/// First candidate route, first leg. A leg-less candidate counts as no
/// route since every response field derives from the leg.
fn first_leg(routes: Vec<CandidateRoute>) -> Option<RouteDetails> {
    let route = routes.into_iter().next()?;
    let leg = route.legs.into_iter().next()?;

    Some(RouteDetails {
        start_address: leg.start_address,
        end_address: leg.end_address,
        distance: leg.distance.text,
        duration: leg.duration.text,
        steps: leg
            .steps
            .into_iter()
            .map(|step| RouteStep {
                instruction: step.html_instructions,
                distance: step.distance.text,
            })
            .collect(),
    })
}

#[async_trait]
impl Maps for GoogleMaps {
    #[tracing::instrument(skip(self))]
    async fn search_places(
        &self,
        query: &str,
        location: &str,
    ) -> Result<Vec<PlaceSummary>, Error> {
        let url = format!("https://{}/maps/api/place/textsearch/json", self.api_base);

        let res = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("query", query)])
            .query(&[("location", location)])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<SearchResult>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        let results = data.results.unwrap_or_default();

        Ok(results.into_iter().map(SearchResult::summarize).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn directions(
        &self,
        start: &str,
        end: &str,
        mode: TravelMode,
    ) -> Result<Option<RouteDetails>, Error> {
        let url = format!("https://{}/maps/api/directions/json", self.api_base);

        let res = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .query(&[("origin", start)])
            .query(&[("destination", end)])
            .query(&[("mode", mode.name())])
            .send()
            .await?;

        let status_code = res.status().as_u16();

        if status_code >= 400 && status_code < 500 {
            return Err(invalid_input_error());
        } else if status_code != 200 {
            return Err(upstream_error());
        }

        let data: Response<Vec<CandidateRoute>> = res.json().await?;

        if !(data.status == "OK" || data.status == "ZERO_RESULTS") {
            return Err(upstream_error());
        }

        let routes = data.routes.unwrap_or_default();

        Ok(first_leg(routes))
    }
}
