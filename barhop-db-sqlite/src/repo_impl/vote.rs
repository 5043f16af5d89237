use super::*;

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn create_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }

    fn count_votes_of_place(&self, place_id: &str, choice: VoteChoice) -> Result<usize> {
        count_votes_of_place(&mut self.conn.borrow_mut(), place_id, choice)
    }
}

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }

    fn count_votes_of_place(&self, place_id: &str, choice: VoteChoice) -> Result<usize> {
        count_votes_of_place(&mut self.conn.borrow_mut(), place_id, choice)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn create_vote(&self, vote: &Vote) -> Result<()> {
        create_vote(&mut self.conn.borrow_mut(), vote)
    }

    fn count_votes_of_place(&self, place_id: &str, choice: VoteChoice) -> Result<usize> {
        count_votes_of_place(&mut self.conn.borrow_mut(), place_id, choice)
    }
}

fn create_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    let new_vote = models::NewPlaceVote {
        place_id: vote.place_id.as_str(),
        voter_id: vote.voter_id.as_str(),
        vote: vote.choice.into(),
        created_at: vote.created_at.into_seconds(),
    };
    // A duplicate ballot violates the composite primary key and is
    // reported as `AlreadyExists`.
    diesel::insert_into(schema::place_vote::table)
        .values(&new_vote)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn count_votes_of_place(
    conn: &mut SqliteConnection,
    place_id: &str,
    choice: VoteChoice,
) -> Result<usize> {
    use schema::place_vote::dsl;
    Ok(dsl::place_vote
        .filter(dsl::place_id.eq(place_id))
        .filter(dsl::vote.eq(VoteChoicePrimitive::from(choice)))
        .select(diesel::dsl::count(dsl::voter_id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
