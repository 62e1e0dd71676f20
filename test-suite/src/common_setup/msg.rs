use cosmwasm_std::Addr;

pub struct RaffleContracts {
    pub raffle: Addr,
    pub nois: Addr,
}

pub struct RaffleParticipants {
    pub one: Addr,
    pub two: Addr,
    pub three: Addr,
    pub four: Addr,
    pub five: Addr,
    pub six: Addr,
}
