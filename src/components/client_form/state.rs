/// What the visitor wants to send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
	Complaint,
	Request,
	Other,
}

/// Label and field name of the step-two text area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailField {
	pub id: &'static str,
	pub label: &'static str,
}

impl Choice {
	/// Parses a `<select>` value; the empty placeholder is no choice.
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			"" => None,
			"complaint" => Some(Choice::Complaint),
			"request" => Some(Choice::Request),
			_ => Some(Choice::Other),
		}
	}

	pub fn value(self) -> &'static str {
		match self {
			Choice::Complaint => "complaint",
			Choice::Request => "request",
			Choice::Other => "other",
		}
	}

	pub fn detail_field(self) -> DetailField {
		match self {
			Choice::Complaint => DetailField {
				id: "complaintDetails",
				label: "Détails de la plainte:",
			},
			Choice::Request => DetailField {
				id: "requestDetails",
				label: "Détails de la demande:",
			},
			Choice::Other => DetailField {
				id: "simpleMessage",
				label: "Votre message:",
			},
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
	#[default]
	Contact,
	Details,
}

/// A submitted message, as it would be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientMessage {
	pub choice: Choice,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub details: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientForm {
	pub choice: Option<Choice>,
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub details: String,
	pub step: Step,
}

impl ClientForm {
	/// Step one is complete: a choice and three non-blank text fields.
	pub fn can_advance(&self) -> bool {
		self.choice.is_some()
			&& !self.first_name.trim().is_empty()
			&& !self.last_name.trim().is_empty()
			&& !self.email.trim().is_empty()
	}

	pub fn advance(&mut self) -> bool {
		if !self.can_advance() {
			return false;
		}
		self.step = Step::Details;
		true
	}

	pub fn back(&mut self) {
		self.step = Step::Contact;
	}

	/// Step-two field for the current choice.
	pub fn detail_field(&self) -> DetailField {
		self.choice.unwrap_or(Choice::Other).detail_field()
	}

	/// Takes the message and resets the form to an empty step one.
	/// Without a choice nothing is sent and the form is left untouched.
	pub fn submit(&mut self) -> Option<ClientMessage> {
		let choice = self.choice?;
		let form = std::mem::take(self);
		Some(ClientMessage {
			choice,
			first_name: form.first_name,
			last_name: form.last_name,
			email: form.email,
			details: form.details,
		})
	}
}
