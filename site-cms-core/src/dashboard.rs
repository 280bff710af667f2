use sea_orm::ConnectionTrait;
use site_cms_error::StorageResult;
use site_cms_models::domain::prelude::DashboardStats;
use site_cms_repository::{
    GalleryRepository, GuideRepository, PartnerRepository, ResourceRepository, StyleRepository,
    TestimonialRepository, TourRepository, VideoRepository,
};

pub struct DashboardService;

impl DashboardService {
    pub async fn stats<C>(db: &C) -> StorageResult<DashboardStats>
    where
        C: ConnectionTrait,
    {
        let (
            tours,
            active_testimonials,
            guides,
            partners,
            videos,
            gallery_items,
            published_styles,
            draft_styles,
        ) = tokio::try_join!(
            TourRepository::count(db),
            TestimonialRepository::count(db, true),
            GuideRepository::count(db, false),
            PartnerRepository::count(db, false),
            VideoRepository::count(db, false),
            GalleryRepository::count(db, true),
            StyleRepository::count_by_published(db, true),
            StyleRepository::count_by_published(db, false),
        )?;
        Ok(DashboardStats {
            tours,
            active_testimonials,
            guides,
            partners,
            videos,
            gallery_items,
            published_styles,
            draft_styles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_support::memory_db, StyleService};
    use site_cms_models::domain::prelude::{NewTestimonial, SectionStylePatch};

    fn testimonial(is_active: bool) -> NewTestimonial {
        NewTestimonial {
            customer_name: "Ana".into(),
            customer_location: None,
            content: "Great trip".into(),
            rating: 5,
            avatar: None,
            order_index: 0,
            is_active,
        }
    }

    #[tokio::test]
    async fn counts_active_testimonials_and_style_states() {
        let db = memory_db().await;
        TestimonialRepository::create(&db, testimonial(true)).await.unwrap();
        TestimonialRepository::create(&db, testimonial(false)).await.unwrap();
        StyleService::upsert(&db, "hero", SectionStylePatch::default())
            .await
            .unwrap();
        StyleService::upsert(&db, "about", SectionStylePatch::default())
            .await
            .unwrap();
        StyleService::publish(&db, "hero").await.unwrap();

        let stats = DashboardService::stats(&db).await.unwrap();
        assert_eq!(stats.active_testimonials, 1);
        assert_eq!(stats.published_styles, 1);
        assert_eq!(stats.draft_styles, 1);
        assert_eq!(stats.tours, 0);
    }
}
