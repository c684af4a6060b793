use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

// Record the Party / Crowdfund contracts a bounty was deployed to.
// One-shot: addresses cannot be rewritten afterwards.
#[derive(Accounts)]
pub struct DeployBounty<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [BOUNTY, creator.key().as_ref(), &bounty.bounty_id.to_le_bytes()],
        bump = bounty.bump,
        has_one = creator @ BountyError::UnauthorizedCreator
    )]
    pub bounty: Account<'info, Bounty>,
}

impl<'info> DeployBounty<'info> {
    pub fn deploy_bounty(&mut self, party_address: Pubkey, crowdfund_address: Pubkey) -> Result<()> {
        let bounty = &mut self.bounty;
        require!(!bounty.is_deployed(), BountyError::AlreadyDeployed);
        require!(!bounty.status.is_terminal(), BountyError::BountyNotActive);

        bounty.party_address = Some(party_address);
        bounty.crowdfund_address = Some(crowdfund_address);

        msg!("Bounty {} deployed to party {}", bounty.bounty_id, party_address);
        Ok(())
    }
}

// Creator toggles a bounty between active and paused
#[derive(Accounts)]
pub struct SetBountyStatus<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [BOUNTY, creator.key().as_ref(), &bounty.bounty_id.to_le_bytes()],
        bump = bounty.bump,
        has_one = creator @ BountyError::UnauthorizedCreator
    )]
    pub bounty: Account<'info, Bounty>,
}

impl<'info> SetBountyStatus<'info> {
    pub fn set_bounty_status(&mut self, status: BountyStatus) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let bounty = &mut self.bounty;

        let allowed = matches!(
            (bounty.status, status),
            (BountyStatus::Active, BountyStatus::Paused) | (BountyStatus::Paused, BountyStatus::Active)
        );
        require!(allowed, BountyError::InvalidStatusTransition);
        require!(!bounty.is_expired(now), BountyError::BountyExpired);

        bounty.status = status;
        Ok(())
    }
}

// Anyone can expire a bounty once its deadline passed
#[derive(Accounts)]
pub struct ExpireBounty<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [BOUNTY, bounty.creator.as_ref(), &bounty.bounty_id.to_le_bytes()],
        bump = bounty.bump,
    )]
    pub bounty: Account<'info, Bounty>,
}

impl<'info> ExpireBounty<'info> {
    pub fn expire_bounty(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let bounty = &mut self.bounty;

        require!(!bounty.status.is_terminal(), BountyError::InvalidStatusTransition);
        require!(bounty.is_expired(now), BountyError::BountyNotExpired);

        bounty.status = BountyStatus::Expired;
        msg!("Bounty {} expired by {}", bounty.bounty_id, self.caller.key());
        Ok(())
    }
}
