// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking workflow state machine.
//!
//! Pure state management for the panel's booking flow; all network
//! calls happen outside and report their outcome back into the
//! workflow. Quote staleness is the central invariant: any edit to a
//! price-affecting field drops the current quote, and submission is
//! only possible while a fresh quote is held.

use crate::records::{CreateBookingRequest, Placement, PricingQuote};

/// Steps of the booking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStep {
    /// Choosing a platform.
    #[default]
    BrowsingPlatforms,
    /// Choosing a placement on the selected platform.
    BrowsingPlacements,
    /// Filling the booking form; no valid quote held.
    ComposingBooking,
    /// A quote request is in flight.
    QuotePending,
    /// A quote matching the current form is held.
    QuoteReady,
    /// A booking submission is in flight.
    Submitting,
    /// The booking was accepted.
    Submitted,
}

/// The booking form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    /// The campaign name.
    pub campaign_name: String,
    /// The ad creative image URL.
    pub ad_image_url: String,
    /// The click-through link URL, if any.
    pub ad_link_url: Option<String>,
    /// The targeted region name.
    pub region: String,
    /// Optional postal code.
    pub postal_code: Option<String>,
    /// Booking start date.
    pub start_date: String,
    /// Booking end date.
    pub end_date: String,
}

/// A quote request handed out by [`BookingWorkflow::begin_quote`].
///
/// `form_version` identifies the form state the request was built from.
/// The caller passes it back with the response so that a response which
/// raced a form edit is discarded instead of installing a quote for
/// inputs the user no longer has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    /// Form version captured when the request was issued.
    pub form_version: u64,
    /// The placement to price.
    pub placement_id: i64,
    /// The targeted region name.
    pub region: String,
    /// Booking start date.
    pub start_date: String,
    /// Booking end date.
    pub end_date: String,
}

/// The booking workflow state machine.
#[derive(Debug, Clone, Default)]
pub struct BookingWorkflow {
    step: WorkflowStep,
    platform: Option<String>,
    placement: Option<Placement>,
    form: BookingForm,
    quote: Option<PricingQuote>,
    form_version: u64,
}

impl BookingWorkflow {
    /// Creates a workflow at the platform-browsing step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    #[must_use]
    pub const fn step(&self) -> WorkflowStep {
        self.step
    }

    /// The selected platform key, if any.
    #[must_use]
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    /// The selected placement, if any.
    #[must_use]
    pub const fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// The current form contents.
    #[must_use]
    pub const fn form(&self) -> &BookingForm {
        &self.form
    }

    /// The held quote, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<&PricingQuote> {
        self.quote.as_ref()
    }

    /// Selects a platform and moves to placement browsing.
    pub fn select_platform(&mut self, platform: impl Into<String>) {
        self.platform = Some(platform.into());
        self.placement = None;
        self.form = BookingForm::default();
        self.quote = None;
        self.form_version = self.form_version.wrapping_add(1);
        self.step = WorkflowStep::BrowsingPlacements;
    }

    /// Returns to platform browsing, dropping any selection.
    pub fn back_to_platforms(&mut self) {
        self.platform = None;
        self.placement = None;
        self.form = BookingForm::default();
        self.quote = None;
        self.form_version = self.form_version.wrapping_add(1);
        self.step = WorkflowStep::BrowsingPlatforms;
    }

    /// Selects a placement and opens the booking form.
    ///
    /// Booked placements are not selectable; selecting one leaves the
    /// workflow unchanged.
    pub fn select_placement(&mut self, placement: &Placement) {
        if self.step != WorkflowStep::BrowsingPlacements || !placement.is_available() {
            return;
        }
        self.placement = Some(placement.clone());
        self.form = BookingForm::default();
        self.quote = None;
        self.form_version = self.form_version.wrapping_add(1);
        self.step = WorkflowStep::ComposingBooking;
    }

    fn invalidate_quote(&mut self) {
        self.form_version = self.form_version.wrapping_add(1);
        self.quote = None;
        if matches!(
            self.step,
            WorkflowStep::QuotePending | WorkflowStep::QuoteReady
        ) {
            self.step = WorkflowStep::ComposingBooking;
        }
    }

    /// Sets the campaign name. Does not affect the quote.
    pub fn set_campaign_name(&mut self, value: impl Into<String>) {
        self.form.campaign_name = value.into();
    }

    /// Sets the creative image URL. Does not affect the quote.
    pub fn set_ad_image_url(&mut self, value: impl Into<String>) {
        self.form.ad_image_url = value.into();
    }

    /// Sets the click-through link URL. Does not affect the quote.
    pub fn set_ad_link_url(&mut self, value: Option<String>) {
        self.form.ad_link_url = value;
    }

    /// Sets the postal code. Does not affect the quote.
    pub fn set_postal_code(&mut self, value: Option<String>) {
        self.form.postal_code = value;
    }

    /// Sets the region and drops any held quote.
    pub fn set_region(&mut self, value: impl Into<String>) {
        self.form.region = value.into();
        self.invalidate_quote();
    }

    /// Sets the start date and drops any held quote.
    pub fn set_start_date(&mut self, value: impl Into<String>) {
        self.form.start_date = value.into();
        self.invalidate_quote();
    }

    /// Sets the end date and drops any held quote.
    pub fn set_end_date(&mut self, value: impl Into<String>) {
        self.form.end_date = value.into();
        self.invalidate_quote();
    }

    /// Whether a quote can be requested for the current form.
    #[must_use]
    pub fn can_request_quote(&self) -> bool {
        matches!(
            self.step,
            WorkflowStep::ComposingBooking | WorkflowStep::QuoteReady
        ) && !self.form.region.trim().is_empty()
            && !self.form.start_date.trim().is_empty()
            && !self.form.end_date.trim().is_empty()
    }

    /// Marks a quote request as in flight.
    ///
    /// Returns the request to send, or `None` when the form is not
    /// ready for a quote. The returned `form_version` must accompany
    /// the response handed to [`Self::quote_received`] or
    /// [`Self::quote_failed`].
    pub fn begin_quote(&mut self) -> Option<QuoteRequest> {
        if !self.can_request_quote() {
            return None;
        }
        let placement = self.placement.as_ref()?;
        self.quote = None;
        self.step = WorkflowStep::QuotePending;
        Some(QuoteRequest {
            form_version: self.form_version,
            placement_id: placement.id,
            region: self.form.region.clone(),
            start_date: self.form.start_date.clone(),
            end_date: self.form.end_date.clone(),
        })
    }

    /// Records a successful quote response.
    ///
    /// A response whose `form_version` no longer matches the form (it
    /// was edited while the request was in flight) is discarded.
    pub fn quote_received(&mut self, form_version: u64, quote: PricingQuote) {
        if self.step == WorkflowStep::QuotePending && form_version == self.form_version {
            self.quote = Some(quote);
            self.step = WorkflowStep::QuoteReady;
        }
    }

    /// Records a failed quote request; the form stays editable. Stale
    /// failures are discarded the same way as stale responses.
    pub fn quote_failed(&mut self, form_version: u64) {
        if self.step == WorkflowStep::QuotePending && form_version == self.form_version {
            self.quote = None;
            self.step = WorkflowStep::ComposingBooking;
        }
    }

    /// Whether the booking can be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.step == WorkflowStep::QuoteReady && self.quote.is_some()
    }

    /// Marks a submission as in flight and returns the request to send.
    ///
    /// Returns `None` unless a fresh quote is held.
    pub fn begin_submit(&mut self) -> Option<CreateBookingRequest> {
        if !self.can_submit() {
            return None;
        }
        let placement = self.placement.as_ref()?;
        let request: CreateBookingRequest = CreateBookingRequest {
            placement_id: placement.id,
            campaign_name: self.form.campaign_name.clone(),
            ad_image_url: self.form.ad_image_url.clone(),
            ad_link_url: self.form.ad_link_url.clone(),
            region: self.form.region.clone(),
            postal_code: self.form.postal_code.clone(),
            start_date: self.form.start_date.clone(),
            end_date: self.form.end_date.clone(),
        };
        self.step = WorkflowStep::Submitting;
        Some(request)
    }

    /// Records a successful submission.
    ///
    /// The form and quote reset, and the returned platform key tells
    /// the caller which placement list to re-fetch.
    pub fn submit_succeeded(&mut self) -> Option<String> {
        if self.step != WorkflowStep::Submitting {
            return None;
        }
        self.placement = None;
        self.form = BookingForm::default();
        self.quote = None;
        self.step = WorkflowStep::Submitted;
        self.platform.clone()
    }

    /// Records a failed submission; the held quote stays valid for a
    /// retry.
    pub fn submit_failed(&mut self) {
        if self.step == WorkflowStep::Submitting {
            self.step = WorkflowStep::QuoteReady;
        }
    }
}
