/// A small post collection in the shape the data layer delivers: embedded
/// categories, images out of display order, mixed Arabic/French content.
pub const POSTS_JSON: &str = r##"[
  {
    "id": "5e2f1f9a-1d57-4f3e-9d0e-0a1b2c3d4e5f",
    "title": "Water Report",
    "description": "Annual report about the irrigation canals",
    "category": {
      "id": "c1",
      "name": "Reports",
      "name_ar": "تقارير",
      "slug": "reports",
      "is_active": true,
      "display_order": 1
    },
    "created_at": "2024-01-01T09:30:00Z",
    "images": [
      { "id": "i2", "url": "https://cdn.example/2.jpg", "display_order": 2 },
      { "id": "i1", "url": "https://cdn.example/1.jpg", "display_order": 1 },
      { "id": "i3", "url": "https://cdn.example/3.jpg", "display_order": 3 }
    ],
    "author": "admin"
  },
  {
    "id": "7a8b9c0d-2e3f-4a5b-8c9d-0e1f2a3b4c5d",
    "title": "مقال جديد",
    "description": "أخبار الجمعية لهذا الشهر",
    "category_id": "news",
    "created_at": "2024-06-01T12:00:00Z"
  },
  {
    "id": "9c0d1e2f-3a4b-5c6d-7e8f-9a0b1c2d3e4f",
    "title": "Entretien des canaux",
    "description": "Calendrier des travaux d'entretien",
    "category_id": "maintenance",
    "created_at": "2024-03-15T08:00:00Z"
  },
  {
    "id": "1f2e3d4c-5b6a-7d8e-9f0a-1b2c3d4e5f6a",
    "title": "إعلان",
    "category_id": "news",
    "created_at": "2024-06-01T12:00:00Z"
  }
]"##;
