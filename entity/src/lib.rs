pub mod allowed_user;
pub mod delegate;
pub mod team_sequence;

/*
 Delegates are grouped into teams by a plain integer team_id, there is no team table.
 A delegation (one form submission) creates 1-10 delegates sharing a fresh team_id,
 slot 1 being the head delegate.
 Team ids come from team_sequence so concurrent submissions never collide.
 allowed_user is the edit allow-list, anyone else signed in gets view-only.
 */
