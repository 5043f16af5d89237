use super::prelude::*;
use super::ActorContext;

/// Minimum number of "yes" votes required, with a simple plurality over
/// "no", before a submission is approved automatically.
pub const APPROVAL_QUORUM: usize = 3;

/// The tally after a ballot, returned so the caller can render immediate
/// feedback without a second read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    pub yes_count: usize,
    pub no_count: usize,
    pub status: PlaceStatus,
}

impl VoteTally {
    pub fn reaches_quorum(&self) -> bool {
        self.yes_count >= APPROVAL_QUORUM && self.yes_count > self.no_count
    }
}

/// Casts a ballot on a submitted place and approves it once the quorum
/// is reached.
///
/// The caller must run this inside a single store transaction: the
/// insert, the recount and the conditional approval form one atomic
/// unit with respect to concurrent votes on the same place.
pub fn cast_vote<R>(
    repo: &R,
    actor: &ActorContext,
    place_id: &Id,
    choice: VoteChoice,
    at: Timestamp,
) -> Result<VoteTally>
where
    R: PlaceRepo + VoteRepo,
{
    let place = repo.get_place(place_id.as_str())?;
    if place.status != PlaceStatus::Submitted {
        return Err(Error::VoteNotOpen);
    }
    if place.is_owned_by(&actor.profile_id) {
        return Err(Error::SelfVote);
    }
    let vote = Vote {
        place_id: place.id.clone(),
        voter_id: actor.profile_id.clone(),
        choice,
        created_at: at,
    };
    match repo.create_vote(&vote) {
        Err(RepoError::AlreadyExists) => return Err(Error::AlreadyVoted),
        other => other?,
    }

    let yes_count = repo.count_votes_of_place(place_id.as_str(), VoteChoice::Yes)?;
    let no_count = repo.count_votes_of_place(place_id.as_str(), VoteChoice::No)?;
    let mut tally = VoteTally {
        yes_count,
        no_count,
        status: place.status,
    };
    if tally.reaches_quorum() {
        // The compare-and-swap keeps approval one-way even if the status
        // changed underneath this transaction.
        if repo.approve_place_if_submitted(place_id.as_str(), at)? > 0 {
            log::info!(
                "Place {place_id} approved by quorum ({yes_count} yes / {no_count} no)"
            );
            tally.status = PlaceStatus::Approved;
        } else {
            tally.status = repo.get_place(place_id.as_str())?.status;
        }
    }
    Ok(tally)
}
