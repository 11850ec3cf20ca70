//! Day and activity list bookkeeping.
//!
//! Every operation keeps two invariants: `days[i].day_number() == i + 1`, and no
//! day ever has an empty item list. Indices are expected to come from the
//! draft's own lengths, an out of range index panics.

use crate::{ActivityItem, DayPlan, ItineraryDraft, RecommendationRef};

/// Upper bound the duration field accepts.
pub const MAX_DURATION_DAYS: u32 = 30;

impl ItineraryDraft {
	/// Grows or truncates the day list to `days` entries. Existing days keep
	/// their order and content; new days get one blank row. Values below 1 are
	/// treated as 1.
	pub fn set_duration(&mut self, days: u32) {
		let days = days.max(1) as usize;
		let current = self.days.len();

		if days > current {
			self.days
				.extend((current + 1..=days).map(|n| DayPlan::new(n as u32)));
		} else {
			self.days.truncate(days);
		}
	}

	/// Applies raw duration field text. Only the leading digits count, so
	/// `"2.5"` is 2 and `"4 days"` is 4. No digits or zero becomes 1 and the
	/// result is capped at [`MAX_DURATION_DAYS`].
	pub fn set_duration_input(&mut self, input: &str) {
		let days = input
			.trim_start()
			.chars()
			.map_while(|c| c.to_digit(10))
			.fold(0u32, |acc, digit| acc.saturating_mul(10).saturating_add(digit))
			.clamp(1, MAX_DURATION_DAYS);

		self.set_duration(days);
	}

	pub fn add_activity(&mut self, day_index: usize) {
		self.days[day_index].items.push(ActivityItem::default());
	}

	/// Removes a row unless it is the only one left in its day. Returns whether
	/// anything was removed.
	pub fn remove_activity(&mut self, day_index: usize, item_index: usize) -> bool {
		let items = &mut self.days[day_index].items;
		if items.len() <= 1 {
			return false;
		}

		items.remove(item_index);
		true
	}

	pub fn add_day(&mut self) {
		self.set_duration(self.duration_days() + 1);
	}

	/// Removes a day and renumbers the ones after it. The last remaining day
	/// can't be removed. Returns whether anything was removed.
	pub fn remove_day(&mut self, day_index: usize) -> bool {
		if self.days.len() <= 1 {
			return false;
		}

		self.days.remove(day_index);
		self.renumber_days();
		true
	}

	/// Copies a recommendation into a day. A day holding a single blank row has
	/// that row replaced, otherwise the recommendation is appended.
	pub fn import_recommendation(&mut self, day_index: usize, recommendation: &RecommendationRef) {
		let item = recommendation.to_activity();
		let items = &mut self.days[day_index].items;

		if let [only] = items.as_mut_slice() {
			if only.is_blank() {
				*only = item;
				return;
			}
		}

		items.push(item);
	}

	pub(crate) fn renumber_days(&mut self) {
		for (index, day) in self.days.iter_mut().enumerate() {
			day.day_number = index as u32 + 1;
		}
	}
}
